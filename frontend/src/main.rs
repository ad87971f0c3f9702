fn main() {
    empty_state_frontend::start();
}
