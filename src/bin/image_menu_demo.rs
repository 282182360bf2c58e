use color_eyre::eyre;
use widget_demos::demos::{image_menu, ImageMenuDemo};
use widget_demos::program::launch;

fn main() -> eyre::Result<()> {
    launch(image_menu::NAME, ImageMenuDemo::default_config(), ImageMenuDemo::new)
}
