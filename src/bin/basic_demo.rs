use color_eyre::eyre;
use widget_demos::demos::{basic, BasicDemo};
use widget_demos::program::launch;

fn main() -> eyre::Result<()> {
    launch(basic::NAME, BasicDemo::default_config(), BasicDemo::new)
}
