fn main() -> eyre::Result<()> {
    skingen::main()
}
