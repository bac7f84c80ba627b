fn main() -> Result<(), Box<dyn std::error::Error>> {
    // protoc is only required when the gRPC service is compiled in
    if std::env::var_os("CARGO_FEATURE_SERVER").is_some() {
        tonic_build::compile_protos("proto/nutrition_optimizer.proto")?;
    }
    println!("cargo:rerun-if-changed=proto/nutrition_optimizer.proto");
    Ok(())
}
