//! Prints the Application CRD manifest as YAML.

use crds::Application;
use kube::CustomResourceExt;

fn main() -> Result<(), serde_yaml::Error> {
    let yaml = serde_yaml::to_string(&Application::crd())?;
    print!("{yaml}");
    Ok(())
}
