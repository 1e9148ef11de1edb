//! The floem view of a properties container.

use std::{ops::Deref, rc::Rc};

use floem::{
    IntoView,
    event::{Event, EventListener},
    reactive::{Trigger, create_trigger},
    views::{Decorators, dyn_stack, label, stack, text, v_stack},
};
use smallvec::SmallVec;

use crate::{
    container::PropertiesContainer,
    l10n::Messages,
    layout::{GridDisplayLayout, LayoutConfig, LayoutState, PropertyLayoutDirection},
    property::DisplayProperty,
    viewport::Viewport,
};

/// A [`PropertiesContainer`] whose repaint requests drive floem's reactive
/// system.
///
/// Cloning yields another handle to the same container. The container is
/// initialized on creation and disposed when the last handle is dropped.
#[derive(Clone)]
pub struct ReactiveContainer {
    container: Rc<PropertiesContainer>,
    viewport: Viewport,
    repaint: Trigger,
}

impl ReactiveContainer {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_config(LayoutConfig::default(), Messages::default(), viewport)
    }

    pub fn with_config(config: LayoutConfig, messages: Messages, viewport: Viewport) -> Self {
        let repaint = create_trigger();
        let container =
            PropertiesContainer::with_config(config, Rc::new(viewport.clone()), repaint)
                .messages(messages);
        container.init();
        Self {
            container: Rc::new(container),
            viewport,
            repaint,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Subscribe the running effect to this container's repaint requests.
    pub fn track(&self) {
        self.repaint.track();
    }
}

impl Deref for ReactiveContainer {
    type Target = PropertiesContainer;

    fn deref(&self) -> &Self::Target {
        &self.container
    }
}

/// One line of the property grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct GridRow {
    index: usize,
    columns: GridDisplayLayout,
    direction: PropertyLayoutDirection,
    cells: SmallVec<[(usize, DisplayProperty); 2]>,
}

/// Split `properties` into grid lines, filling each line left to right.
fn grid_rows(properties: &[DisplayProperty], layout: LayoutState) -> Vec<GridRow> {
    let per_row = layout.columns.column_count();
    properties
        .iter()
        .cloned()
        .enumerate()
        .collect::<Vec<_>>()
        .chunks(per_row)
        .enumerate()
        .map(|(index, cells)| GridRow {
            index,
            columns: layout.columns,
            direction: layout.direction,
            cells: cells.iter().cloned().collect(),
        })
        .collect()
}

fn property_cell(
    property: DisplayProperty,
    columns: GridDisplayLayout,
    direction: PropertyLayoutDirection,
) -> impl IntoView {
    stack((
        text(property.display_name().to_string()).style(|s| s.padding(2.0)),
        text(property.value().to_string()).style(|s| s.padding(2.0)),
    ))
    .style(move |s| {
        let s = s.width_pct(100.0 / columns.column_count() as f64);
        match direction {
            PropertyLayoutDirection::Row => s.flex_row(),
            PropertyLayoutDirection::Column => s.flex_col(),
        }
    })
}

fn grid_row(row: GridRow) -> impl IntoView {
    let GridRow {
        columns,
        direction,
        cells,
        ..
    } = row;
    dyn_stack(
        move || cells.clone(),
        |cell| cell.clone(),
        move |(_, property)| property_cell(property, columns, direction),
    )
    .style(|s| s.flex_row().width_full())
}

/// Build the view for `properties`.
///
/// The view shows the status announcement followed by the property grid,
/// sized to the container's layout height, and feeds window resizes into the
/// container's viewport.
pub fn properties_container_view(properties: ReactiveContainer) -> impl IntoView {
    let status = {
        let properties = properties.clone();
        label(move || {
            properties.track();
            properties.status_message().to_string()
        })
    };

    let grid = {
        let properties = properties.clone();
        dyn_stack(
            move || {
                properties.track();
                if properties.is_loading() {
                    return Vec::new();
                }
                let layout = properties.current_layout();
                properties.with_properties(|list| grid_rows(list, layout))
            },
            |row| row.clone(),
            grid_row,
        )
        .style(|s| s.flex_col().width_full())
    };

    let style_source = properties.clone();
    v_stack((status, grid))
        .style(move |s| {
            style_source.track();
            s.width_full()
                .height(style_source.current_layout().height_px as f64)
        })
        .on_event_stop(EventListener::WindowResized, move |event| {
            if let Event::WindowResized(size) = event {
                properties.viewport().resize(size.width);
            }
        })
}
