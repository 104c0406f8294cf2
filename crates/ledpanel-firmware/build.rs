use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=.env");
    dotenv_build::output(dotenv_build::Config::default()).unwrap();

    let version = Utc::now().format("%Y%m%d.%H%M");
    println!("cargo:rustc-env=BUILD_VERSION={version}");
}
