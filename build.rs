use std::env;
use std::error::Error;
use std::path::Path;

use fs_extra::copy_items;
use fs_extra::dir::{remove, CopyOptions};

fn main() -> Result<(), Box<dyn Error>> {
    //Copy /assets next to the built binaries, so the demos can find their font and icon
    {
        const ASSETS_FOLDER_NAME: &str = "assets";

        println!("cargo:rerun-if-changed={ASSETS_FOLDER_NAME}");

        let options = {
            let mut o = CopyOptions::new();
            o.overwrite = true; // Overwrite existing files with same name
            o
        };

        let source_path = Path::new(&env::var("CARGO_MANIFEST_DIR")?).join(ASSETS_FOLDER_NAME);
        // Cargo nests the out dir three levels below the profile dir: "target/debug/build/widget_demos-<hash>/out"
        let dest_path = Path::new(&env::var("OUT_DIR")?).join("../../..");

        if source_path.is_dir() {
            remove(dest_path.join(ASSETS_FOLDER_NAME))?; //Get rid of the old copy
            copy_items(&[source_path], &dest_path, &options)?;
        } else {
            println!("cargo:warning=no `{ASSETS_FOLDER_NAME}` folder found, demos will run without their font and icon");
        }
    }

    shadow_rs::new()?;

    Ok(())
}
