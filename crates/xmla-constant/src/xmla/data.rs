//! OLE DB data type codes and flag sets.

xmla_constant! {
    ///
    /// DbType
    ///
    /// OLE DB type indicator, as reported in DATA_TYPE columns.
    ///
    pub enum DbType {
        Empty = (0, "DBTYPE_EMPTY", "No value was specified."),
        I2 = (2, "DBTYPE_I2", "A two-byte signed integer."),
        I4 = (3, "DBTYPE_I4", "A four-byte signed integer."),
        R4 = (4, "DBTYPE_R4", "A single-precision floating-point value."),
        R8 = (5, "DBTYPE_R8", "A double-precision floating-point value."),
        Cy = (6, "DBTYPE_CY", "A currency value, scaled by 10,000."),
        Date = (7, "DBTYPE_DATE", "A date stored as a double."),
        Bstr = (8, "DBTYPE_BSTR", "A null-terminated Unicode character string."),
        Error = (10, "DBTYPE_ERROR", "A 32-bit error code."),
        Bool = (11, "DBTYPE_BOOL", "A Boolean value."),
        Variant = (12, "DBTYPE_VARIANT", "An automation VARIANT."),
        Decimal = (14, "DBTYPE_DECIMAL", "An exact numeric value with fixed precision and scale."),
        I1 = (16, "DBTYPE_I1", "A one-byte signed integer."),
        Ui1 = (17, "DBTYPE_UI1", "A one-byte unsigned integer."),
        Ui2 = (18, "DBTYPE_UI2", "A two-byte unsigned integer."),
        Ui4 = (19, "DBTYPE_UI4", "A four-byte unsigned integer."),
        I8 = (20, "DBTYPE_I8", "An eight-byte signed integer."),
        Ui8 = (21, "DBTYPE_UI8", "An eight-byte unsigned integer."),
        Guid = (72, "DBTYPE_GUID", "A globally unique identifier."),
        Bytes = (128, "DBTYPE_BYTES", "A binary data value."),
        Str = (129, "DBTYPE_STR", "A string of single-byte characters."),
        Wstr = (130, "DBTYPE_WSTR", "A null-terminated Unicode character string."),
        Numeric = (131, "DBTYPE_NUMERIC", "An exact numeric value with fixed precision and scale."),
        DbDate = (133, "DBTYPE_DBDATE", "A date structure."),
        DbTime = (134, "DBTYPE_DBTIME", "A time structure."),
        DbTimestamp = (135, "DBTYPE_DBTIMESTAMP", "A timestamp structure."),
    }
}

xmla_constant! {
    ///
    /// Searchable
    ///
    /// How a provider type may be used in a WHERE clause.
    ///
    pub enum Searchable {
        Unsearchable = (1, "DB_UNSEARCHABLE", "The type cannot be used in a WHERE clause."),
        LikeOnly = (2, "DB_LIKE_ONLY", "The type can be used only with the LIKE predicate."),
        AllExceptLike = (
            3,
            "DB_ALL_EXCEPT_LIKE",
            "The type can be used with all comparison operators except LIKE."
        ),
        Searchable = (4, "DB_SEARCHABLE", "The type can be used with any comparison operator."),
    }
}

xmla_constant! {
    ///
    /// ColumnFlag
    ///
    /// DBCOLUMNFLAGS bits describing a table column.
    ///
    pub enum ColumnFlag {
        IsBookmark = (0x1, "DBCOLUMNFLAGS_ISBOOKMARK", "The column is a bookmark."),
        MayDefer = (0x2, "DBCOLUMNFLAGS_MAYDEFER", "The column value may be deferred."),
        Write = (0x4, "DBCOLUMNFLAGS_WRITE", "The column can be updated."),
        WriteUnknown = (
            0x8,
            "DBCOLUMNFLAGS_WRITEUNKNOWN",
            "It is not known whether the column can be updated."
        ),
        IsFixedLength = (0x10, "DBCOLUMNFLAGS_ISFIXEDLENGTH", "All values have the same length."),
        IsNullable = (0x20, "DBCOLUMNFLAGS_ISNULLABLE", "The column can be set to NULL."),
        MaybeNull = (0x40, "DBCOLUMNFLAGS_MAYBENULL", "The column can contain NULL values."),
        IsLong = (0x80, "DBCOLUMNFLAGS_ISLONG", "The column contains a long value."),
        IsRowId = (0x100, "DBCOLUMNFLAGS_ISROWID", "The column contains a persistent row identifier."),
        IsRowVer = (0x200, "DBCOLUMNFLAGS_ISROWVER", "The column contains a row version."),
        CacheDeferred = (
            0x1000,
            "DBCOLUMNFLAGS_CACHEDEFERRED",
            "The deferred column value is cached once read."
        ),
    }
}

xmla_constant! {
    ///
    /// FontFlag
    ///
    /// FONT_FLAGS cell property bits.
    ///
    pub enum FontFlag {
        Bold = (1, "MDFF_BOLD", "Bold."),
        Italic = (2, "MDFF_ITALIC", "Italic."),
        Underline = (4, "MDFF_UNDERLINE", "Underline."),
        Strikeout = (8, "MDFF_STRIKEOUT", "Strikeout."),
    }
}
