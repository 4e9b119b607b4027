//! Compilation must be a pure function of its inputs.

use std::thread;

use stream_config::{compile_transport_server, CompilerConfig, TransportServerConfig};

mod common;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_types_can_cross_threads() {
    assert_send_sync::<stream_config::TransportServer>();
    assert_send_sync::<stream_config::ResolvedState>();
    assert_send_sync::<TransportServerConfig>();
}

#[test]
fn test_repeated_compilation_is_identical() {
    let ts = common::with_tls(common::tcp_transport_server(), "missing");
    let state = common::resolved_state("default").with_external_name("default", "backup-svc");
    let config = CompilerConfig::default();

    let first = compile_transport_server(&ts, 5000, &state, &config);
    let second = compile_transport_server(&ts, 5000, &state, &config);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_parallel_compilation_matches_sequential() {
    let resources = vec![
        (common::tcp_transport_server(), common::resolved_state("default")),
        (common::passthrough_transport_server(), common::resolved_state("prod")),
        (
            common::with_tls(common::tcp_transport_server(), "tls-secret"),
            common::resolved_state("default"),
        ),
    ];
    let config = CompilerConfig::default();

    let sequential: Vec<_> = resources
        .iter()
        .map(|(ts, state)| compile_transport_server(ts, 5000, state, &config))
        .collect();

    let parallel: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = resources
            .iter()
            .map(|(ts, state)| {
                let config = &config;
                s.spawn(move || compile_transport_server(ts, 5000, state, config))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn test_upstream_names_unique_across_namespaces() {
    let mut a = common::tcp_transport_server();
    a.metadata.namespace = "team-a".into();
    let mut b = common::tcp_transport_server();
    b.metadata.namespace = "team-b".into();
    let config = CompilerConfig::default();

    let got_a = compile_transport_server(&a, 5000, &common::resolved_state("team-a"), &config);
    let got_b = compile_transport_server(&b, 5000, &common::resolved_state("team-b"), &config);

    for ua in &got_a.upstreams {
        assert!(got_b.upstreams.iter().all(|ub| ub.name != ua.name));
    }
    assert_ne!(
        got_a.health_check_match.unwrap().name,
        got_b.health_check_match.unwrap().name
    );
}
