//! Width driven layout selection for the properties grid.
//!
//! The grid reflows between three arrangements:
//!
//! | viewport width        | columns | item alignment |
//! |-----------------------|---------|----------------|
//! | `1366px` and above    | two     | row            |
//! | `1024px` to `1365px`  | two     | column         |
//! | below `1024px`        | one     | column         |
//!
//! A breakpoint belongs to the wider bracket, so a `1366px` viewport is laid
//! out in rows and a `1024px` viewport still gets two columns.

use strum::{AsRefStr, Display, EnumString};

/// Height in pixels reserved for the header and collapse control.
pub const COLLAPSE_HEIGHT: u64 = 25;
/// Height of one grid line when label and value sit side by side.
pub const ROW_PROPERTY_HEIGHT: u64 = 28;
/// Height of one grid line when the value is stacked under its label.
pub const COLUMN_PROPERTY_HEIGHT: u64 = 46;

/// How many columns the property grid is split into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridDisplayLayout {
    #[strum(serialize = "oneColumn")]
    #[cfg_attr(feature = "serde", serde(rename = "oneColumn"))]
    OneColumn,
    #[strum(serialize = "twoColumns")]
    #[cfg_attr(feature = "serde", serde(rename = "twoColumns"))]
    TwoColumns,
}

impl GridDisplayLayout {
    pub fn column_count(self) -> usize {
        match self {
            GridDisplayLayout::OneColumn => 1,
            GridDisplayLayout::TwoColumns => 2,
        }
    }
}

/// How a single property lays out its label relative to its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyLayoutDirection {
    /// Label and value on one line.
    #[strum(serialize = "rowLayout")]
    #[cfg_attr(feature = "serde", serde(rename = "rowLayout"))]
    Row,
    /// Value below the label.
    #[strum(serialize = "columnLayout")]
    #[cfg_attr(feature = "serde", serde(rename = "columnLayout"))]
    Column,
}

/// Width breakpoints in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutBreakpoints {
    /// Minimum width for two columns with row aligned items.
    pub two_column_row: f64,
    /// Minimum width for two columns with column aligned items.
    pub two_column: f64,
}

impl Default for LayoutBreakpoints {
    fn default() -> Self {
        Self {
            two_column_row: 1366.0,
            two_column: 1024.0,
        }
    }
}

/// Pixel heights used to size the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutMetrics {
    pub collapse: u64,
    pub row_height: u64,
    pub column_height: u64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            collapse: COLLAPSE_HEIGHT,
            row_height: ROW_PROPERTY_HEIGHT,
            column_height: COLUMN_PROPERTY_HEIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutConfig {
    pub breakpoints: LayoutBreakpoints,
    pub metrics: LayoutMetrics,
}

impl LayoutConfig {
    /// Select the layout for a viewport `width` showing `count` properties.
    ///
    /// Total over every input: a width that is not at least the two column
    /// breakpoint (including `NaN`) gets the single column layout, and the
    /// height saturates instead of overflowing.
    pub fn select(&self, width: f64, count: usize) -> LayoutState {
        let count = count as u64;
        let lines_in_two_columns = count.div_ceil(2);
        let LayoutMetrics {
            collapse,
            row_height,
            column_height,
        } = self.metrics;

        let (columns, direction, height) = if width >= self.breakpoints.two_column_row {
            (
                GridDisplayLayout::TwoColumns,
                PropertyLayoutDirection::Row,
                lines_in_two_columns.saturating_mul(row_height),
            )
        } else if width >= self.breakpoints.two_column {
            (
                GridDisplayLayout::TwoColumns,
                PropertyLayoutDirection::Column,
                lines_in_two_columns.saturating_mul(column_height),
            )
        } else {
            (
                GridDisplayLayout::OneColumn,
                PropertyLayoutDirection::Column,
                count.saturating_mul(column_height),
            )
        };

        LayoutState {
            columns,
            direction,
            height_px: height.saturating_add(collapse),
        }
    }

    /// The layout a container starts with, before anything was measured.
    pub fn initial(&self) -> LayoutState {
        self.select(f64::INFINITY, 0)
    }
}

/// The derived arrangement of the grid.
///
/// Only produced by [`LayoutConfig::select`]; there is no way to set the
/// fields of a container's layout directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutState {
    pub columns: GridDisplayLayout,
    pub direction: PropertyLayoutDirection,
    pub height_px: u64,
}

impl LayoutState {
    /// [`LayoutConfig::select`] with the default breakpoints and metrics.
    pub fn compute(width: f64, count: usize) -> Self {
        LayoutConfig::default().select(width, count)
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        LayoutConfig::default().initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ceil_half(n: u64) -> u64 {
        n / 2 + n % 2
    }

    #[test]
    fn wide_viewport_uses_two_row_columns() {
        for width in [1366.0, 1400.0, 1920.0, 10_000.0, f64::INFINITY] {
            for n in 0..12usize {
                let layout = LayoutState::compute(width, n);
                assert_eq!(layout.columns, GridDisplayLayout::TwoColumns);
                assert_eq!(layout.direction, PropertyLayoutDirection::Row);
                assert_eq!(layout.height_px, ceil_half(n as u64) * 28 + 25);
            }
        }
    }

    #[test]
    fn medium_viewport_uses_two_stacked_columns() {
        for width in [1024.0, 1100.5, 1365.0, 1365.99] {
            for n in 0..12usize {
                let layout = LayoutState::compute(width, n);
                assert_eq!(layout.columns, GridDisplayLayout::TwoColumns);
                assert_eq!(layout.direction, PropertyLayoutDirection::Column);
                assert_eq!(layout.height_px, ceil_half(n as u64) * 46 + 25);
            }
        }
    }

    #[test]
    fn narrow_viewport_uses_one_column() {
        for width in [0.0, 320.0, 800.0, 1023.0, 1023.99, -5.0] {
            for n in 0..12usize {
                let layout = LayoutState::compute(width, n);
                assert_eq!(layout.columns, GridDisplayLayout::OneColumn);
                assert_eq!(layout.direction, PropertyLayoutDirection::Column);
                assert_eq!(layout.height_px, n as u64 * 46 + 25);
            }
        }
    }

    #[test]
    fn boundaries() {
        let cases = [
            (1366.0, 5, GridDisplayLayout::TwoColumns, PropertyLayoutDirection::Row, 109),
            (1365.0, 5, GridDisplayLayout::TwoColumns, PropertyLayoutDirection::Column, 163),
            (1024.0, 5, GridDisplayLayout::TwoColumns, PropertyLayoutDirection::Column, 163),
            (1023.0, 5, GridDisplayLayout::OneColumn, PropertyLayoutDirection::Column, 255),
            (800.0, 0, GridDisplayLayout::OneColumn, PropertyLayoutDirection::Column, 25),
        ];
        for (width, n, columns, direction, height_px) in cases {
            assert_eq!(
                LayoutState::compute(width, n),
                LayoutState {
                    columns,
                    direction,
                    height_px
                },
                "width {width}, {n} properties"
            );
        }
    }

    #[test]
    fn empty_is_collapse_height_everywhere() {
        for width in [500.0, 1200.0, 1500.0] {
            assert_eq!(LayoutState::compute(width, 0).height_px, COLLAPSE_HEIGHT);
        }
    }

    #[test]
    fn nan_width_is_narrow() {
        let layout = LayoutState::compute(f64::NAN, 3);
        assert_eq!(layout.columns, GridDisplayLayout::OneColumn);
        assert_eq!(layout.height_px, 3 * 46 + 25);
    }

    #[test]
    fn height_saturates() {
        let layout = LayoutState::compute(800.0, usize::MAX);
        assert_eq!(layout.height_px, u64::MAX);
    }

    #[test]
    fn custom_config() {
        let config = LayoutConfig {
            breakpoints: LayoutBreakpoints {
                two_column_row: 900.0,
                two_column: 600.0,
            },
            metrics: LayoutMetrics {
                collapse: 0,
                row_height: 10,
                column_height: 20,
            },
        };
        assert_eq!(config.select(900.0, 3).height_px, 20);
        assert_eq!(
            config.select(600.0, 3).direction,
            PropertyLayoutDirection::Column
        );
        assert_eq!(config.select(599.0, 3).height_px, 60);
    }

    #[test]
    fn default_layout_is_empty_two_row_columns() {
        let layout = LayoutState::default();
        assert_eq!(layout.columns, GridDisplayLayout::TwoColumns);
        assert_eq!(layout.direction, PropertyLayoutDirection::Row);
        assert_eq!(layout.height_px, COLLAPSE_HEIGHT);
    }

    #[test]
    fn identifiers() {
        assert_eq!(GridDisplayLayout::TwoColumns.to_string(), "twoColumns");
        assert_eq!(GridDisplayLayout::OneColumn.as_ref(), "oneColumn");
        assert_eq!(
            "columnLayout".parse::<PropertyLayoutDirection>(),
            Ok(PropertyLayoutDirection::Column)
        );
        assert_eq!(PropertyLayoutDirection::Row.to_string(), "rowLayout");
        assert!("diagonal".parse::<PropertyLayoutDirection>().is_err());
    }
}
