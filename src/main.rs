use clap::Parser;

mod account;
mod app;
mod cli;
mod init;
mod logs;
mod settings;
mod utils;

#[cfg(test)]
mod tests;

fn main() {
    let cli = cli::Cli::parse();
    if let Err(e) = app::init::launch(cli) {
        // The logger may not be up yet
        eprintln!("Yabe: {e:?}");
        log::error!("Yabe: {e:?}");
    }
}
