// src/bin/write_openapi_snapshot.rs
use anyhow::Result;
use blog_gateway::presentation::http::openapi;
use std::path::Path;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = openapi::snapshot_path_from_env();
    openapi::write_openapi_snapshot(Path::new(&output_path))?;
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
