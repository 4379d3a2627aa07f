#![allow(unused)]

use std::sync::Once;

use walnut_registry::Service;

/// Registers a global default tracing subscriber when called for the first time. This is intended
/// for use in tests.
pub fn subscribe() {
    static INSTALL_TRACING_SUBSCRIBER: Once = Once::new();
    INSTALL_TRACING_SUBSCRIBER.call_once(|| {
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).unwrap();
    });
}

/// Services below `/skydns/local/example`, in the order a registry listing returns them.
pub fn create_example() -> Vec<Service> {
    [
        (
            "/skydns/local/example/web",
            r#"{"host":"10.0.0.1","port":80,"group":"blue","ttl":60}"#,
        ),
        (
            "/skydns/local/example/web",
            r#"{"host":"10.0.0.2","port":80,"ttl":60}"#,
        ),
        (
            "/skydns/local/example/web/east",
            r#"{"host":"web1.east.example.local","port":8080,"group":"blue","targetstrip":1}"#,
        ),
        (
            "/skydns/local/example/web/east",
            r#"{"host":"web2.east.example.local","port":8080,"group":"green"}"#,
        ),
        (
            "/skydns/local/example/web/west",
            r#"{"host":"2001:db8::1","port":8080,"text":"region=west"}"#,
        ),
    ]
    .into_iter()
    .map(|(key, value)| Service::from_json(key, value.as_bytes()).expect("example service"))
    .collect()
}
