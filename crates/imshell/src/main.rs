fn main() {
    imshell::run();
}
