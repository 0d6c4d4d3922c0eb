fn main() -> anyhow::Result<()> {
    tabhead_lib::run()
}
