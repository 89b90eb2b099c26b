//! Discover/Execute protocol properties.

xmla_constant! {
    ///
    /// Method
    ///
    /// The XMLA methods for which a property may be read or written.
    ///
    pub enum Method {
        Discover = (1, "Discover", "Property is applicable to the Discover method."),
        Execute = (2, "Execute", "Property is applicable to the Execute method."),
        DiscoverAndExecute = (
            3,
            "Discover/Execute",
            "Property is applicable to both the Discover and Execute methods."
        ),
    }
}

xmla_constant! {
    ///
    /// Access
    ///
    pub enum Access {
        Read = (1, "Read", "Property can be read."),
        Write = (2, "Write", "Property can be written."),
        ReadWrite = (3, "ReadWrite", "Property can be read and written."),
    }
}

xmla_constant! {
    ///
    /// AuthenticationMode
    ///
    pub enum AuthenticationMode {
        Unauthenticated = (-1, "Unauthenticated", "No user ID or password needs to be sent."),
        Authenticated = (
            -1,
            "Authenticated",
            "User ID and password must be included in the information required for the connection."
        ),
        Integrated = (
            -1,
            "Integrated",
            "The data source uses the underlying security to determine authorization."
        ),
    }
}

xmla_constant! {
    ///
    /// ProviderType
    ///
    pub enum ProviderType {
        Tdp = (-1, "TDP", "Tabular data provider."),
        Mdp = (-1, "MDP", "Multidimensional data provider."),
        Dmp = (-1, "DMP", "Data mining provider."),
    }
}

xmla_constant! {
    ///
    /// Format
    ///
    /// Format of the result set returned by Execute.
    ///
    pub enum Format {
        Tabular = (-1, "Tabular", "A flat, tabular result set in a rowset."),
        Multidimensional = (
            -1,
            "Multidimensional",
            "A multidimensional result set in a dataset."
        ),
        Native = (
            -1,
            "Native",
            "The client does not request a format; the provider returns the result set in its native format."
        ),
    }
}

xmla_constant! {
    ///
    /// AxisFormat
    ///
    pub enum AxisFormat {
        TupleFormat = (
            0,
            "TupleFormat",
            "The axis contains members with a tuple-per-member layout."
        ),
        ClusterFormat = (
            1,
            "ClusterFormat",
            "The axis contains clusters of members with a shared layout."
        ),
        CustomFormat = (2, "CustomFormat", "The provider chooses the axis layout."),
    }
}

xmla_constant! {
    ///
    /// Content
    ///
    /// What an Execute or Discover response carries.
    ///
    pub enum Content {
        None = (-1, "None", "No data or schema."),
        Schema = (-1, "Schema", "Only the XML schema."),
        Data = (-1, "Data", "Only the data."),
        SchemaData = (-1, "SchemaData", "Both the XML schema and the data."),
    }
}

xmla_constant! {
    ///
    /// MdxSupport
    ///
    pub enum MdxSupport {
        Core = (0, "Core", "Core MDX statements are supported."),
    }
}

xmla_constant! {
    ///
    /// StateSupport
    ///
    pub enum StateSupport {
        None = (0, "None", "No session support."),
        Sessions = (1, "Sessions", "Session support with BeginSession and EndSession."),
    }
}

xmla_constant! {
    ///
    /// VisualMode
    ///
    pub enum VisualMode {
        Default = (
            0,
            "DBPROPVAL_VISUAL_MODE_DEFAULT",
            "Provider-dependent; usually equivalent to the original mode."
        ),
        Visual = (1, "DBPROPVAL_VISUAL_MODE_VISUAL", "Visual totals are enabled."),
        Original = (
            2,
            "DBPROPVAL_VISUAL_MODE_ORIGINAL",
            "Visual totals are not enabled."
        ),
    }
}

xmla_constant! {
    ///
    /// Updateable
    ///
    /// Cell update capability reported through the CellInfo UPDATEABLE property.
    ///
    pub enum Updateable {
        MaskEnabled = (0x0000_0000, "MD_MASK_ENABLED", "The cell can be updated."),
        MaskNotEnabled = (
            0x1000_0000,
            "MD_MASK_NOT_ENABLED",
            "The cell cannot be updated."
        ),
        CellUpdateEnabled = (
            0x0000_0001,
            "CELL_UPDATE_ENABLED",
            "The cell can be updated in the cellset."
        ),
        CellUpdateEnabledWithUpdate = (
            0x0000_0002,
            "CELL_UPDATE_ENABLED_WITH_UPDATE",
            "The cell can be updated with an UPDATE statement."
        ),
        CellUpdateNotEnabledFormula = (
            0x1000_0001,
            "CELL_UPDATE_NOT_ENABLED_FORMULA",
            "The cell cannot be updated because it has a calculated member among its coordinates."
        ),
        CellUpdateNotEnabledNonsumMeasure = (
            0x1000_0002,
            "CELL_UPDATE_NOT_ENABLED_NONSUM_MEASURE",
            "The cell cannot be updated because its measure is not aggregated by sum."
        ),
        CellUpdateNotEnabledSecure = (
            0x1000_0005,
            "CELL_UPDATE_NOT_ENABLED_SECURE",
            "The cell cannot be updated because it is secured."
        ),
    }
}
