use std::{env, error::Error};

use protoc_bin_vendored::protoc_bin_path;

fn main() -> Result<(), Box<dyn Error>> {
    let protoc_path = protoc_bin_path().expect("failed to get vendored protoc binary");
    unsafe {
        env::set_var("PROTOC", &protoc_path);
    }

    println!("cargo:rerun-if-changed=proto/mesos/mesos.proto");

    tonic_build::configure()
        .build_server(false)
        .build_client(false)
        .compile_protos(&["proto/mesos/mesos.proto"], &["proto"])?;
    Ok(())
}
