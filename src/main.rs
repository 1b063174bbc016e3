mod cli;

fn main() {
    cli::setup_panic_hook();
    cli::run();
}
