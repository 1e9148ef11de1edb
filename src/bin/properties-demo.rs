use floem::{
    Application, IntoView,
    kurbo::Size,
    views::{Decorators, label, v_stack},
    window::WindowConfig,
};
use floem_properties::{
    DisplayProperty, LayoutConfig, Messages, ReactiveContainer, Viewport,
    properties_container_view,
};

const WINDOW_WIDTH: f64 = 1400.0;

fn server_properties() -> Vec<DisplayProperty> {
    [
        ("Server", "localhost,1433"),
        ("Version", "16.0.1000.6"),
        ("Edition", "Developer Edition (64-bit)"),
        ("Computer name", "build-agent-07"),
        ("OS version", "Linux (Ubuntu 22.04)"),
        ("Database", "master"),
        ("Status", "Normal"),
    ]
    .into_iter()
    .map(DisplayProperty::from)
    .collect()
}

#[cfg(feature = "localization")]
fn messages() -> Messages {
    Messages::system()
}

#[cfg(not(feature = "localization"))]
fn messages() -> Messages {
    Messages::english()
}

fn app_view() -> impl IntoView {
    let properties = ReactiveContainer::with_config(
        LayoutConfig::default(),
        messages(),
        Viewport::new(WINDOW_WIDTH),
    );

    let toggle = {
        let properties = properties.clone();
        label(|| "Toggle loading".to_string()).on_click_stop(move |_| {
            if properties.is_loading() {
                properties.set_loading(false);
                properties.set_properties(server_properties());
            } else {
                properties.set_loading(true);
            }
        })
    };

    v_stack((toggle.style(|s| s.padding(8.0)), properties_container_view(properties)))
        .style(|s| s.width_full().height_full().padding(16.0))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    Application::new()
        .window(
            |_| app_view(),
            Some(
                WindowConfig::default()
                    .size(Size::new(WINDOW_WIDTH, 500.0))
                    .title("Properties Container"),
            ),
        )
        .run();
}
