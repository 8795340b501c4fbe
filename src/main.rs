use anyhow::Result;

fn main() -> Result<()> {
    mpmp::run()
}
