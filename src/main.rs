use helpdeck::{boot, cli, tui};

fn main() {
    let matches = cli::parse_args();
    boot::init_common();

    if let Err(err) = tui::start(&matches) {
        log::error!("helpdeck exited with error: {err:?}");
        eprintln!("helpdeck: {err:#}");
        std::process::exit(1);
    }
}
