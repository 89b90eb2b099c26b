//! Classification codes for OLAP metadata objects (dimensions, hierarchies,
//! levels, members, measures and properties).

xmla_constant! {
    ///
    /// DimensionType
    ///
    pub enum DimensionType {
        Unknown = (0, "MD_DIMTYPE_UNKNOWN", "The dimension type is unknown."),
        Time = (1, "MD_DIMTYPE_TIME", "A time dimension."),
        Measure = (2, "MD_DIMTYPE_MEASURE", "The measures dimension."),
        Other = (3, "MD_DIMTYPE_OTHER", "A regular dimension."),
        Quantitative = (5, "MD_DIMTYPE_QUANTITATIVE", "A quantitative dimension."),
        Accounts = (6, "MD_DIMTYPE_ACCOUNTS", "An accounts dimension."),
        Customers = (7, "MD_DIMTYPE_CUSTOMERS", "A customers dimension."),
        Products = (8, "MD_DIMTYPE_PRODUCTS", "A products dimension."),
        Scenario = (9, "MD_DIMTYPE_SCENARIO", "A scenario dimension."),
        Utility = (10, "MD_DIMTYPE_UTILITY", "A utility dimension."),
        Currency = (11, "MD_DIMTYPE_CURRENCY", "A currency dimension."),
        Rates = (12, "MD_DIMTYPE_RATES", "A rates dimension."),
        Channel = (13, "MD_DIMTYPE_CHANNEL", "A channel dimension."),
        Promotion = (14, "MD_DIMTYPE_PROMOTION", "A promotion dimension."),
        Organization = (15, "MD_DIMTYPE_ORGANIZATION", "An organization dimension."),
        BillOfMaterials = (16, "MD_DIMTYPE_BILL_OF_MATERIALS", "A bill of materials dimension."),
        Geography = (17, "MD_DIMTYPE_GEOGRAPHY", "A geography dimension."),
    }
}

xmla_constant! {
    ///
    /// HierarchyStructure
    ///
    pub enum HierarchyStructure {
        FullyBalanced = (
            0,
            "MD_STRUCTURE_FULLYBALANCED",
            "Every leaf member is at the same depth."
        ),
        RaggedBalanced = (
            1,
            "MD_STRUCTURE_RAGGEDBALANCED",
            "Leaf members sit at different depths because some levels are skipped."
        ),
        Unbalanced = (2, "MD_STRUCTURE_UNBALANCED", "A parent-child hierarchy."),
        Network = (3, "MD_STRUCTURE_NETWORK", "A network hierarchy."),
    }
}

xmla_constant! {
    ///
    /// HierarchyOrigin
    ///
    /// Bitmask describing where a hierarchy comes from.
    ///
    pub enum HierarchyOrigin {
        UserDefined = (1, "MD_USER_DEFINED", "A user-defined hierarchy."),
        SystemEnabled = (2, "MD_SYSTEM_ENABLED", "An attribute hierarchy."),
        SystemInternal = (4, "MD_SYSTEM_INTERNAL", "An attribute hierarchy with no attribute."),
    }
}

xmla_constant! {
    ///
    /// LevelType
    ///
    /// Level classification. Time and geography codes combine a family bit
    /// with a discriminator, so these ordinals are not single bits.
    ///
    pub enum LevelType {
        Regular = (0x0000, "MDLEVEL_TYPE_REGULAR", "A regular level."),
        All = (0x0001, "MDLEVEL_TYPE_ALL", "The top level of a hierarchy, holding the all member."),
        Calculated = (0x0002, "MDLEVEL_TYPE_CALCULATED", "A calculated level."),
        Time = (0x0004, "MDLEVEL_TYPE_TIME", "A time level of unspecified granularity."),
        Reserved1 = (0x0008, "MDLEVEL_TYPE_RESERVED1", "Reserved."),
        TimeYears = (0x0014, "MDLEVEL_TYPE_TIME_YEARS", "A time level of years."),
        TimeHalfYear = (0x0024, "MDLEVEL_TYPE_TIME_HALF_YEAR", "A time level of half years."),
        TimeQuarters = (0x0044, "MDLEVEL_TYPE_TIME_QUARTERS", "A time level of quarters."),
        TimeMonths = (0x0084, "MDLEVEL_TYPE_TIME_MONTHS", "A time level of months."),
        TimeWeeks = (0x0104, "MDLEVEL_TYPE_TIME_WEEKS", "A time level of weeks."),
        TimeDays = (0x0204, "MDLEVEL_TYPE_TIME_DAYS", "A time level of days."),
        TimeHours = (0x0304, "MDLEVEL_TYPE_TIME_HOURS", "A time level of hours."),
        TimeMinutes = (0x0404, "MDLEVEL_TYPE_TIME_MINUTES", "A time level of minutes."),
        TimeSeconds = (0x0804, "MDLEVEL_TYPE_TIME_SECONDS", "A time level of seconds."),
        TimeUndefined = (0x1004, "MDLEVEL_TYPE_TIME_UNDEFINED", "A time level of undefined granularity."),
        GeoContinent = (0x2001, "MDLEVEL_TYPE_GEO_CONTINENT", "A geography level of continents."),
        GeoRegion = (0x2002, "MDLEVEL_TYPE_GEO_REGION", "A geography level of regions."),
        GeoCountry = (0x2003, "MDLEVEL_TYPE_GEO_COUNTRY", "A geography level of countries."),
        GeoStateOrProvince = (
            0x2004,
            "MDLEVEL_TYPE_GEO_STATE_OR_PROVINCE",
            "A geography level of states or provinces."
        ),
        GeoCounty = (0x2005, "MDLEVEL_TYPE_GEO_COUNTY", "A geography level of counties."),
        GeoCity = (0x2006, "MDLEVEL_TYPE_GEO_CITY", "A geography level of cities."),
        GeoPostalCode = (0x2007, "MDLEVEL_TYPE_GEO_POSTALCODE", "A geography level of postal codes."),
        GeoPoint = (0x2008, "MDLEVEL_TYPE_GEO_POINT", "A geography level of points."),
        OrgUnit = (0x1011, "MDLEVEL_TYPE_ORG_UNIT", "A level of organizational units."),
        BomResource = (0x1012, "MDLEVEL_TYPE_BOM_RESOURCE", "A bill of materials level."),
        Quantitative = (0x1013, "MDLEVEL_TYPE_QUANTITATIVE", "A quantitative level."),
        Account = (0x1014, "MDLEVEL_TYPE_ACCOUNT", "A level of accounts."),
        Scenario = (0x1015, "MDLEVEL_TYPE_SCENARIO", "A level of scenarios."),
        Utility = (0x1016, "MDLEVEL_TYPE_UTILITY", "A utility level."),
        Customer = (0x1021, "MDLEVEL_TYPE_CUSTOMER", "A level of customers."),
        CustomerGroup = (0x1022, "MDLEVEL_TYPE_CUSTOMER_GROUP", "A level of customer groups."),
        CustomerHousehold = (
            0x1023,
            "MDLEVEL_TYPE_CUSTOMER_HOUSEHOLD",
            "A level of customer households."
        ),
        Product = (0x1031, "MDLEVEL_TYPE_PRODUCT", "A level of products."),
        ProductGroup = (0x1032, "MDLEVEL_TYPE_PRODUCT_GROUP", "A level of product groups."),
        Person = (0x1041, "MDLEVEL_TYPE_PERSON", "A level of people."),
        Company = (0x1042, "MDLEVEL_TYPE_COMPANY", "A level of companies."),
        CurrencySource = (0x1051, "MDLEVEL_TYPE_CURRENCY_SOURCE", "A level of source currencies."),
        CurrencyDestination = (
            0x1052,
            "MDLEVEL_TYPE_CURRENCY_DESTINATION",
            "A level of destination currencies."
        ),
        Channel = (0x1061, "MDLEVEL_TYPE_CHANNEL", "A level of distribution channels."),
        Representative = (0x1062, "MDLEVEL_TYPE_REPRESENTATIVE", "A level of sales representatives."),
        Promotion = (0x1071, "MDLEVEL_TYPE_PROMOTION", "A level of promotions."),
    }
}

xmla_constant! {
    ///
    /// MemberType
    ///
    pub enum MemberType {
        Unknown = (0, "MDMEMBER_TYPE_UNKNOWN", "The member type is unknown."),
        Regular = (1, "MDMEMBER_TYPE_REGULAR", "A regular member."),
        All = (2, "MDMEMBER_TYPE_ALL", "The all member."),
        Measure = (3, "MDMEMBER_TYPE_MEASURE", "A measure."),
        Formula = (4, "MDMEMBER_TYPE_FORMULA", "A calculated member."),
    }
}

xmla_constant! {
    ///
    /// MeasureAggregator
    ///
    pub enum MeasureAggregator {
        Unknown = (0, "MDMEASURE_AGGR_UNKNOWN", "The aggregation function is unknown."),
        Sum = (1, "MDMEASURE_AGGR_SUM", "Sum."),
        Count = (2, "MDMEASURE_AGGR_COUNT", "Count."),
        Min = (3, "MDMEASURE_AGGR_MIN", "Minimum."),
        Max = (4, "MDMEASURE_AGGR_MAX", "Maximum."),
        Avg = (5, "MDMEASURE_AGGR_AVG", "Average."),
        Var = (6, "MDMEASURE_AGGR_VAR", "Variance."),
        Std = (7, "MDMEASURE_AGGR_STD", "Standard deviation."),
        Calculated = (127, "MDMEASURE_AGGR_CALCULATED", "A calculated measure."),
    }
}

xmla_constant! {
    ///
    /// PropertyType
    ///
    /// Bitmask classifying a property.
    ///
    pub enum PropertyType {
        Member = (1, "MDPROP_MEMBER", "A property of a member."),
        Cell = (2, "MDPROP_CELL", "A property of a cell."),
        System = (4, "MDPROP_SYSTEM", "An internal property."),
        Blob = (8, "MDPROP_BLOB", "A binary large object property."),
    }
}

xmla_constant! {
    ///
    /// PropertyContentType
    ///
    pub enum PropertyContentType {
        Regular = (0x00, "MD_PROPTYPE_REGULAR", "A regular property."),
        Id = (0x01, "MD_PROPTYPE_ID", "The member key."),
        RelationToParent = (
            0x02,
            "MD_PROPTYPE_RELATION_TO_PARENT",
            "The relationship of the member to its parent."
        ),
        RollupOperator = (0x03, "MD_PROPTYPE_ROLLUP_OPERATOR", "The unary rollup operator."),
        OrgTitle = (0x11, "MD_PROPTYPE_ORG_TITLE", "An organizational title."),
        Caption = (0x21, "MD_PROPTYPE_CAPTION", "A caption."),
        CaptionShort = (0x22, "MD_PROPTYPE_CAPTION_SHORT", "A short caption."),
        CaptionDescription = (0x23, "MD_PROPTYPE_CAPTION_DESCRIPTION", "A descriptive caption."),
        CaptionAbbreviation = (0x24, "MD_PROPTYPE_CAPTION_ABREVIATION", "An abbreviated caption."),
        WebUrl = (0x31, "MD_PROPTYPE_WEB_URL", "A URL."),
        WebHtml = (0x32, "MD_PROPTYPE_WEB_HTML", "An HTML fragment."),
        WebXmlOrXsl = (0x33, "MD_PROPTYPE_WEB_XML_OR_XSL", "An XML or XSL document."),
        WebMailAlias = (0x34, "MD_PROPTYPE_WEB_MAIL_ALIAS", "An e-mail alias."),
        Address = (0x41, "MD_PROPTYPE_ADDRESS", "A full address."),
        AddressStreet = (0x42, "MD_PROPTYPE_ADDRESS_STREET", "A street."),
        AddressHouse = (0x43, "MD_PROPTYPE_ADDRESS_HOUSE", "A house number."),
        AddressCity = (0x44, "MD_PROPTYPE_ADDRESS_CITY", "A city."),
        AddressStateOrProvince = (
            0x45,
            "MD_PROPTYPE_ADDRESS_STATE_OR_PROVINCE",
            "A state or province."
        ),
        AddressZip = (0x46, "MD_PROPTYPE_ADDRESS_ZIP", "A postal code."),
        AddressQuarter = (0x47, "MD_PROPTYPE_ADDRESS_QUARTER", "A city quarter."),
        AddressCountry = (0x48, "MD_PROPTYPE_ADDRESS_COUNTRY", "A country."),
        AddressBuilding = (0x49, "MD_PROPTYPE_ADDRESS_BUILDING", "A building."),
        AddressRoom = (0x4A, "MD_PROPTYPE_ADDRESS_ROOM", "A room number."),
        AddressFloor = (0x4B, "MD_PROPTYPE_ADDRESS_FLOOR", "A floor number."),
        AddressFax = (0x4C, "MD_PROPTYPE_ADDRESS_FAX", "A fax number."),
        AddressPhone = (0x4D, "MD_PROPTYPE_ADDRESS_PHONE", "A telephone number."),
        GeoCentroidX = (0x61, "MD_PROPTYPE_GEO_CENTROID_X", "The x coordinate of a centroid."),
        GeoCentroidY = (0x62, "MD_PROPTYPE_GEO_CENTROID_Y", "The y coordinate of a centroid."),
        GeoCentroidZ = (0x63, "MD_PROPTYPE_GEO_CENTROID_Z", "The z coordinate of a centroid."),
        GeoBoundaryTop = (0x64, "MD_PROPTYPE_GEO_BOUNDARY_TOP", "The top of a boundary."),
        GeoBoundaryLeft = (0x65, "MD_PROPTYPE_GEO_BOUNDARY_LEFT", "The left of a boundary."),
        GeoBoundaryBottom = (0x66, "MD_PROPTYPE_GEO_BOUNDARY_BOTTOM", "The bottom of a boundary."),
        GeoBoundaryRight = (0x67, "MD_PROPTYPE_GEO_BOUNDARY_RIGHT", "The right of a boundary."),
        GeoBoundaryFront = (0x68, "MD_PROPTYPE_GEO_BOUNDARY_FRONT", "The front of a boundary."),
        GeoBoundaryRear = (0x69, "MD_PROPTYPE_GEO_BOUNDARY_REAR", "The rear of a boundary."),
        GeoBoundaryPolygon = (0x6A, "MD_PROPTYPE_GEO_BOUNDARY_POLYGON", "A boundary polygon."),
        PhysicalSize = (0x71, "MD_PROPTYPE_PHYSICAL_SIZE", "A physical size."),
        PhysicalColor = (0x72, "MD_PROPTYPE_PHYSICAL_COLOR", "A physical color."),
        PhysicalWeight = (0x73, "MD_PROPTYPE_PHYSICAL_WEIGHT", "A physical weight."),
        PhysicalHeight = (0x74, "MD_PROPTYPE_PHYSICAL_HEIGHT", "A physical height."),
        PhysicalWidth = (0x75, "MD_PROPTYPE_PHYSICAL_WIDTH", "A physical width."),
        PhysicalDepth = (0x76, "MD_PROPTYPE_PHYSICAL_DEPTH", "A physical depth."),
        PhysicalVolume = (0x77, "MD_PROPTYPE_PHYSICAL_VOLUME", "A physical volume."),
        PhysicalDensity = (0x78, "MD_PROPTYPE_PHYSICAL_DENSITY", "A physical density."),
        PersonFullName = (0x82, "MD_PROPTYPE_PERSON_FULL_NAME", "A full name."),
        PersonFirstName = (0x83, "MD_PROPTYPE_PERSON_FIRST_NAME", "A first name."),
        PersonLastName = (0x84, "MD_PROPTYPE_PERSON_LAST_NAME", "A last name."),
        PersonMiddleName = (0x85, "MD_PROPTYPE_PERSON_MIDDLE_NAME", "A middle name."),
        PersonDemographic = (0x86, "MD_PROPTYPE_PERSON_DEMOGRAPHIC", "Demographic information."),
        PersonContact = (0x87, "MD_PROPTYPE_PERSON_CONTACT", "Contact information."),
        QtyRangeLow = (0x91, "MD_PROPTYPE_QTY_RANGE_LOW", "The low end of a quantity range."),
        QtyRangeHigh = (0x92, "MD_PROPTYPE_QTY_RANGE_HIGH", "The high end of a quantity range."),
        FormattingColor = (0xA1, "MD_PROPTYPE_FORMATTING_COLOR", "A display color."),
        FormattingOrder = (0xA2, "MD_PROPTYPE_FORMATTING_ORDER", "A display order."),
        FormattingFont = (0xA3, "MD_PROPTYPE_FORMATTING_FONT", "A display font."),
        FormattingFontEffects = (
            0xA4,
            "MD_PROPTYPE_FORMATTING_FONT_EFFECTS",
            "Display font effects."
        ),
        FormattingFontSize = (0xA5, "MD_PROPTYPE_FORMATTING_FONT_SIZE", "A display font size."),
        FormattingSubType = (0xA6, "MD_PROPTYPE_FORMATTING_SUB_TYPE", "A display sub type."),
        Date = (0xB1, "MD_PROPTYPE_DATE", "A date."),
        DateStart = (0xB2, "MD_PROPTYPE_DATE_START", "A start date."),
        DateEnded = (0xB3, "MD_PROPTYPE_DATE_ENDED", "An end date."),
        DateCanceled = (0xB4, "MD_PROPTYPE_DATE_CANCELED", "A cancellation date."),
        DateModified = (0xB5, "MD_PROPTYPE_DATE_MODIFIED", "A modification date."),
        DateDuration = (0xB6, "MD_PROPTYPE_DATE_DURATION", "A duration."),
        Version = (0xC1, "MD_PROPTYPE_VERSION", "A version string."),
    }
}
