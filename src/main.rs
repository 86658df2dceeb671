use weft::protocol::{
    describe_code, is_unsourced, protocol_fingerprint_base64, replica_for, requires_verification,
    version_for, PacketKind,
};

fn main() {
    println!("Weft Protocol Registry");
    println!("======================\n");

    println!(
        "{} packet kinds, fingerprint {}\n",
        PacketKind::COUNT,
        protocol_fingerprint_base64()
    );

    println!("{:>4}  {:<28} {:>3}  {:<10} {}", "code", "name", "ver", "class", "replica");
    for kind in PacketKind::all() {
        let class = if is_unsourced(kind) {
            "unsourced"
        } else if requires_verification(kind) {
            "verified"
        } else {
            "sourced"
        };
        let replica = match replica_for(kind) {
            Some(r) => r.name(),
            None => "-",
        };
        println!(
            "{:>4}  {:<28} {:>3}  {:<10} {}",
            kind.code(),
            kind.name(),
            version_for(kind),
            class,
            replica
        );
    }

    println!("\nOut-of-range rendering: {}", describe_code(PacketKind::COUNT));
}
