fn main() -> anyhow::Result<()> {
    depgate_lib::main()
}
