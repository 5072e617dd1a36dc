//! `pepcheck filters` command

use console::style;
use miette::Result;

use crate::cli::args::GlobalOpts;
use crate::convert::list_conversion_formats;

pub fn run(_global: &GlobalOpts) -> Result<()> {
    let formats = list_conversion_formats();

    if formats.is_empty() {
        println!("No available filters");
        return Ok(());
    }

    println!("{}", style("Available filters:").bold());
    for name in formats {
        println!(" - {}", name);
    }
    Ok(())
}
