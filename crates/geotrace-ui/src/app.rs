//! Root component and the maps context it provides.

use geotrace_app::MapsSdkConfig;
use geotrace_config::MapsLoaderOptions;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct GeotraceAppProps {
    pub(crate) maps: MapsSdkConfig,
}

#[function_component(GeotraceApp)]
pub(crate) fn geotrace_app(props: &GeotraceAppProps) -> Html {
    html! {
        <ContextProvider<MapsSdkConfig> context={props.maps.clone()}>
            <main class="geotrace-shell">
                <MapHost />
            </main>
        </ContextProvider<MapsSdkConfig>>
    }
}

/// Options written by the bootstrap, visible to any descendant.
#[hook]
pub(crate) fn use_maps_options() -> Option<MapsLoaderOptions> {
    use_context::<MapsSdkConfig>().and_then(|sdk| sdk.options().cloned())
}

// Host element map components render into; drawing is up to them.
#[function_component(MapHost)]
fn map_host() -> Html {
    let options = use_maps_options();
    let version = options
        .as_ref()
        .map_or("unconfigured", |opts| opts.version.as_str())
        .to_string();

    html! {
        <section id="map" class="geotrace-map" data-maps-version={version} />
    }
}
