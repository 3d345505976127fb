use eventkit_canonical::{Canonicalizer, SignedFields};

fn main() {
    let fields = SignedFields {
        id: "evt-001",
        project: "sys",
        version: "0.1.0",
        context: "user",
        entity: "avatar",
        event: "update",
        source: "web",
        params: r#"{"size":128}"#,
        access_token: "tok-abc",
        created_at: 1_700_000_000_000,
    };

    let result = Canonicalizer::default().canonicalize(&fields);
    println!("{}", String::from_utf8_lossy(&result.bytes));
    println!("{}", result.signature);
}
