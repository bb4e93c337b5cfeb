//! Cross-implementation vectors. Any change here breaks interoperability with
//! existing verifiers.

use serde_json::json;
use signer_hmac::{HashAlgo, Payload, Signer};

const CLIENT_ID: &str = "12173158495";
const CLIENT_SECRET: &str = "1594122c5c36f438f8ba";

fn payload() -> Payload {
    Payload::from([
        ("page", "https://wepay.com/account/12345"),
        ("redirect_uri", "https://partnersite.com/home"),
        ("token", "10c936ca-5e7c-508b-9e60-b211c20be9bc"),
    ])
}

#[test]
fn sha512_signature() {
    let signer = Signer::new(CLIENT_ID, CLIENT_SECRET);
    assert_eq!(
        signer.sign(&payload()),
        "c2de34c15cd76f797cf80781747da3874639a827a4cb79dcd862cc17b35cf2e2\
         c721ea7d49ab9f60590d637ae0f51fd4ed8ddb551b922e0cd7e35a13b86de360"
    );
}

#[test]
fn sha512_query_string() {
    let signer = Signer::new(CLIENT_ID, CLIENT_SECRET);
    assert_eq!(
        signer.generate_query_string_params(&payload()),
        "client_id=12173158495\
         &page=https://wepay.com/account/12345\
         &redirect_uri=https://partnersite.com/home\
         &stoken=c2de34c15cd76f797cf80781747da3874639a827a4cb79dcd862cc17b35cf2e2\
         c721ea7d49ab9f60590d637ae0f51fd4ed8ddb551b922e0cd7e35a13b86de360\
         &token=10c936ca-5e7c-508b-9e60-b211c20be9bc"
    );
}

#[test]
fn sha256_signature() {
    let signer = Signer::with_options(CLIENT_ID, CLIENT_SECRET, "WePay", HashAlgo::Sha256);
    assert_eq!(signer.sign(&payload()), "3b71e09e6a4d28d03321914c0daf998af400811cef04798877159f12bb335b66");
}

#[test]
fn mixed_scalar_signature() {
    let signer = Signer::new(CLIENT_ID, CLIENT_SECRET);
    let payload = Payload::from_json(&json!({
        "token": "abc",
        "page": "2",
        "flag": true,
        "ratio": 1.5,
        "count": 7,
        "whole": 2.0,
    }))
    .unwrap();
    assert_eq!(
        signer.sign(&payload),
        "525c865ab25085d08c71b8a969e1ff602139f497c56aa718f4bc474c4d156239\
         3cad18e3a37a42bd02821d1f75fea28959615344def68742137b645369bdc320"
    );
}

#[test]
fn canonical_context_of_golden_payload() {
    let signer = Signer::new(CLIENT_ID, CLIENT_SECRET);
    let context = signer_hmac::context::canonicalize(&payload(), signer.identity());
    assert_eq!(
        context,
        "client_id=12173158495\n\
         client_secret=1594122c5c36f438f8ba\n\
         page=https://wepay.com/account/12345\n\
         redirect_uri=https://partnersite.com/home\n\
         token=10c936ca-5e7c-508b-9e60-b211c20be9bc\n\
         \n\
         client_id;client_secret;page;redirect_uri;token"
    );
}
