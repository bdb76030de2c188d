mod components;

use components::app::App;
use ring_touch::model::GestureSettings;

fn main() {
    console_error_panic_hook::set_once();

    // Level is refined once the persisted settings are loaded.
    if console_log::init_with_level(GestureSettings::default().console_level()).is_err() {
        ring_touch::util::clog("console logger already installed");
    }

    yew::Renderer::<App>::new().render();
}
