//! Codes used as values and restrictions of the MDSCHEMA rowsets.

xmla_constant! {
    ///
    /// CubeType
    ///
    pub enum CubeType {
        Cube = (1, "CUBE", "A regular cube."),
        Dimension = (2, "DIMENSION", "A cube dimension exposed as a cube."),
    }
}

xmla_constant! {
    ///
    /// CubeSource
    ///
    /// CUBE_SOURCE restriction; bitmask over the kinds of cube to return.
    ///
    pub enum CubeSource {
        Cube = (1, "CUBE", "Return cubes."),
        Dimension = (2, "DIMENSION", "Return cube dimensions."),
    }
}

xmla_constant! {
    ///
    /// Visibility
    ///
    /// Visibility restriction bitmask shared by the MDSCHEMA rowsets.
    ///
    pub enum Visibility {
        Visible = (1, "VISIBLE", "Return only visible objects."),
        NotVisible = (2, "NOT_VISIBLE", "Return only hidden objects."),
    }
}

xmla_constant! {
    ///
    /// ActionType
    ///
    pub enum ActionType {
        Url = (0x01, "MDACTION_TYPE_URL", "The action string is a URL."),
        Html = (0x02, "MDACTION_TYPE_HTML", "The action string is an HTML script."),
        Statement = (
            0x04,
            "MDACTION_TYPE_STATEMENT",
            "The action string is a statement to execute."
        ),
        Dataset = (0x08, "MDACTION_TYPE_DATASET", "The action string is an MDX statement returning a dataset."),
        Rowset = (0x10, "MDACTION_TYPE_ROWSET", "The action string is a statement returning a rowset."),
        Commandline = (0x20, "MDACTION_TYPE_COMMANDLINE", "The action string is a command line."),
        Proprietary = (
            0x40,
            "MDACTION_TYPE_PROPRIETARY",
            "The action is interpreted by a proprietary client."
        ),
        Report = (0x80, "MDACTION_TYPE_REPORT", "The action string is a report request."),
        Drillthrough = (0x100, "MDACTION_TYPE_DRILLTHROUGH", "The action string is a DRILLTHROUGH statement."),
    }
}

xmla_constant! {
    ///
    /// CoordinateType
    ///
    /// The kind of object an action's COORDINATE refers to.
    ///
    pub enum CoordinateType {
        Cube = (1, "MDACTION_COORDINATE_CUBE", "The action applies to a cube."),
        Dimension = (2, "MDACTION_COORDINATE_DIMENSION", "The action applies to a dimension."),
        Level = (3, "MDACTION_COORDINATE_LEVEL", "The action applies to a level."),
        Member = (4, "MDACTION_COORDINATE_MEMBER", "The action applies to a member."),
        Set = (5, "MDACTION_COORDINATE_SET", "The action applies to a set."),
        Cell = (6, "MDACTION_COORDINATE_CELL", "The action applies to a cell."),
    }
}

xmla_constant! {
    ///
    /// Invocation
    ///
    pub enum Invocation {
        Interactive = (
            1,
            "MDACTION_INVOCATION_INTERACTIVE",
            "A regular action used during normal operations."
        ),
        OnOpen = (
            2,
            "MDACTION_INVOCATION_ON_OPEN",
            "The action should be performed when the cube is first opened."
        ),
        Batch = (
            4,
            "MDACTION_INVOCATION_BATCH",
            "The action is performed as part of a batch operation."
        ),
    }
}

xmla_constant! {
    ///
    /// TreeOp
    ///
    /// Tree operators restricting MDSCHEMA_MEMBERS relative to a member.
    ///
    pub enum TreeOp {
        Ancestors = (0x20, "MDTREEOP_ANCESTORS", "Returns all of the ancestors."),
        Children = (0x01, "MDTREEOP_CHILDREN", "Returns only the immediate children."),
        Siblings = (
            0x02,
            "MDTREEOP_SIBLINGS",
            "Returns members on the same level, including the member itself."
        ),
        Parent = (0x04, "MDTREEOP_PARENT", "Returns only the immediate parent."),
        SelfOp = (0x08, "MDTREEOP_SELF", "Returns the member itself."),
        Descendants = (0x10, "MDTREEOP_DESCENDANTS", "Returns all of the descendants."),
    }
}

xmla_constant! {
    ///
    /// Scope
    ///
    /// Lifetime of a named set or calculated member.
    ///
    pub enum Scope {
        Global = (1, "MDSET_SCOPE_GLOBAL", "Defined in the cube."),
        Session = (2, "MDSET_SCOPE_SESSION", "Defined in the current session."),
    }
}

xmla_constant! {
    ///
    /// FunctionOrigin
    ///
    pub enum FunctionOrigin {
        Msolap = (1, "MDFUNCTION_MSOLAP", "A built-in MDX function."),
        UserDefined = (2, "MDFUNCTION_USER_DEFINED", "A user-defined function."),
    }
}
