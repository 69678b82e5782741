mod cmd;
pub mod conf;
pub mod pkg;
mod prelude;
#[cfg(test)]
mod testutil;

use crate::prelude::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    cmd::run().await?;
    Ok(())
}
