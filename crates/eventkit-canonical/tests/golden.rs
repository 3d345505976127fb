use eventkit_canonical::{Canonicalizer, DigestAlg, Signature, SignedFields};

fn avatar_update() -> SignedFields<'static> {
    SignedFields {
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
    }
}

#[test]
fn canonical_bytes_concatenate_in_fixed_order() {
    assert_eq!(
        avatar_update().canonical_bytes(),
        br#"evt-001sys0.1.0useravatarupdateweb{"size":128}tok-abc1700000000000"#.to_vec()
    );
}

#[test]
fn signature_matches_golden_digest() {
    let result = Canonicalizer::default().canonicalize(&avatar_update());
    assert_eq!(
        result.signature.as_str(),
        "8683bb691872a5baa6f7b2aff608140879753147"
    );
    assert_eq!(result.bytes, avatar_update().canonical_bytes());
}

#[test]
fn negative_timestamp_and_empty_token_are_signed_verbatim() {
    let fields = SignedFields {
        id: "evt-002",
        params: "{}",
        access_token: "",
        created_at: -42,
        ..avatar_update()
    };
    assert_eq!(
        Canonicalizer::default().sign(&fields).as_str(),
        "c8abff6a2d6f224ab13e623aee3e9f5d614a4f53"
    );
}

#[test]
fn verify_rejects_uppercase_hex() {
    let canonicalizer = Canonicalizer::new(DigestAlg::Sha1);
    let fields = avatar_update();
    assert!(canonicalizer.verify(&fields, "8683bb691872a5baa6f7b2aff608140879753147"));
    assert!(!canonicalizer.verify(&fields, "8683BB691872A5BAA6F7B2AFF608140879753147"));
}

#[test]
fn signature_serializes_as_bare_string() {
    let sig = Signature::parse("a9993e364706816aba3e25717850c26c9cd0d89d").unwrap();
    assert_eq!(
        serde_json::to_string(&sig).unwrap(),
        r#""a9993e364706816aba3e25717850c26c9cd0d89d""#
    );
    let alg = serde_json::to_string(&DigestAlg::Sha1).unwrap();
    assert_eq!(alg, r#""sha-1""#);
}
