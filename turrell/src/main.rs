use turrell::OUTPUT_FILE;

fn main() {
    turrell::init_logger();
    log::debug!("start...");

    match turrell::run() {
        Ok(timer) => {
            if cfg!(feature = "timing") {
                println!("\n{}\n", timer.report());
            }
            println!("Saved as {OUTPUT_FILE}");
        }
        Err(e) => {
            let diagnostic = turrell::diagnostic(&e);
            log::error!("{diagnostic}");
            eprintln!("{diagnostic}");
            std::process::exit(1);
        }
    }
}
