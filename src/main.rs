fn main() {
    rocketcart::app::cli::run();
}
