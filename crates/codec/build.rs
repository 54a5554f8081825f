//! `proto/scanwire.proto`를 파일 디스크립터 집합으로 컴파일하여 `OUT_DIR`에 둡니다.
//! 텍스트 형식 입출력이 이 디스크립터를 `include_bytes!`로 읽습니다.

use std::env;
use std::fs;
use std::path::PathBuf;

use prost::Message;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=proto/scanwire.proto");

    let descriptors = protox::compile(["proto/scanwire.proto"], ["proto"])?;
    let out = PathBuf::from(env::var("OUT_DIR")?).join("scanwire_descriptor.bin");
    fs::write(out, descriptors.encode_to_vec())?;
    Ok(())
}
