use prattle::cli;

fn main() {
    cli::run();
}
