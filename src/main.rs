fn main() {
    swatch_bin::main()
}
