use luamachine_lib::Target;

pub fn cmd_info() {
  println!("Host:");
  match Target::current() {
    Some(target) => {
      println!("Target: {}", target);
      println!("Multi-ABI: {}", if target.platform.is_multi_abi() { "yes" } else { "no" });
    }
    _ => println!("Could not detect an engine target for this host."),
  }
}
