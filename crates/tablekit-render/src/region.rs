//! Structural regions of a data table.
//!
//! Every theme carries one style per region. Region names are the keys
//! used in theme files.

use std::fmt;
use std::str::FromStr;

macro_rules! regions {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// A styled region of the table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Region {
            $($variant,)*
        }

        impl Region {
            /// Every region, in declaration order.
            pub const ALL: &'static [Region] = &[$(Region::$variant,)*];

            /// Key of this region in theme files.
            pub fn name(self) -> &'static str {
                match self {
                    $(Region::$variant => $name,)*
                }
            }
        }

        impl FromStr for Region {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Region::$variant),)*
                    _ => Err(format!("unknown region: {}", s)),
                }
            }
        }
    };
}

regions! {
    // Table core
    Container => "container",
    TableWrapper => "table_wrapper",
    Table => "table",
    // Header
    HeaderWrapper => "header_wrapper",
    HeaderRow => "header_row",
    HeaderCell => "header_cell",
    HeaderSortIcon => "header_sort_icon",
    HeaderSortIconActive => "header_sort_icon_active",
    HeaderSortIconHover => "header_sort_icon_hover",
    // Body
    BodyWrapper => "body_wrapper",
    Row => "row",
    Cell => "cell",
    // Toolbar
    Toolbar => "toolbar",
    ToolbarSection => "toolbar_section",
    ToolbarSearchInput => "toolbar_search_input",
    ToolbarInput => "toolbar_input",
    ToolbarButton => "toolbar_button",
    ToolbarDropdown => "toolbar_dropdown",
    // Pagination
    Pagination => "pagination",
    PaginationButton => "pagination_button",
    PaginationButtonActive => "pagination_button_active",
    PaginationSelect => "pagination_select",
    PaginationText => "pagination_text",
    PaginationIconButton => "pagination_icon_button",
    PaginationInput => "pagination_input",
    // Row actions
    RowActionsButton => "row_actions_button",
    RowActionsIcon => "row_actions_icon",
}

impl Region {
    /// Number of regions.
    pub const COUNT: usize = Region::ALL.len();

    /// Position of this region in [`Region::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
