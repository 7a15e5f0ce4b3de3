//! Decoding tests for the container entity graph.

use chrono::{Datelike, TimeZone, Utc};
use portside_models::container::{ContainerInfo, ContainerSummary};
use portside_models::{ApiVersion, DecodeError, Decoder};

/// A realistic inspect payload for a running container, mount-descriptor
/// shape (API 1.20+), placed on a cluster node.
fn inspect_fixture() -> serde_json::Value {
    serde_json::json!({
        "Id": "4fa6e0f0c6786287e131c3852c58a2e01cc697a68231826813597e4994f1d6e2",
        "Created": "2024-03-05T11:22:33.123456789Z",
        "Path": "/bin/sh",
        "Args": ["-c", "while true; do sleep 1; done"],
        "Config": {
            "Hostname": "4fa6e0f0c678",
            "Domainname": "",
            "User": "",
            "AttachStdin": false,
            "AttachStdout": true,
            "AttachStderr": true,
            "ExposedPorts": {"8080/tcp": {}},
            "Tty": false,
            "OpenStdin": false,
            "StdinOnce": false,
            "Env": ["PATH=/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin:/sbin:/bin"],
            "Cmd": ["-c", "while true; do sleep 1; done"],
            "Image": "alpine:3.19",
            "Volumes": null,
            "WorkingDir": "/srv",
            "Entrypoint": ["/bin/sh"],
            "Labels": {"com.example.team": "infra"},
            "StopSignal": "SIGTERM"
        },
        "HostConfig": {
            "Binds": ["/var/data:/srv/data:rw"],
            "PortBindings": {
                "8080/tcp": [{"HostIp": "0.0.0.0", "HostPort": "8080"}]
            },
            "NetworkMode": "bridge",
            "RestartPolicy": {"Name": "on-failure", "MaximumRetryCount": 3},
            "AutoRemove": false,
            "Privileged": false,
            "Memory": 268435456,
            "MemorySwap": 536870912,
            "CpuShares": 512,
            "ReadonlyRootfs": false,
            "ExtraHosts": ["registry.local:10.0.0.7"],
            "LogConfig": {"Type": "json-file", "Config": {"max-size": "10m"}}
        },
        "State": {
            "Status": "running",
            "Running": true,
            "Paused": false,
            "Restarting": false,
            "OOMKilled": false,
            "Dead": false,
            "Pid": 24713,
            "ExitCode": 0,
            "Error": "",
            "StartedAt": "2024-03-05T11:22:34.000123456Z",
            "FinishedAt": "0001-01-01T00:00:00Z"
        },
        "Image": "sha256:7b0fda2d5e1c2bfa2241e9e0b4ccbf9ed9e3a1e0f96f2e04c4b3bf3f3a7b0e61",
        "NetworkSettings": {
            "Bridge": "",
            "Gateway": "172.17.0.1",
            "IPAddress": "172.17.0.4",
            "IPPrefixLen": 16,
            "MacAddress": "02:42:ac:11:00:04",
            "SandboxID": "dc0b1a1b6f1e4f4e9fbbc8de8deff7a9a1d1b6a3f54f4ab3d3a8f1a3f7e9d2b4",
            "SandboxKey": "/var/run/docker/netns/dc0b1a1b6f1e",
            "Ports": {
                "8080/tcp": [{"HostIp": "0.0.0.0", "HostPort": "8080"}],
                "9090/tcp": null
            },
            "Networks": {
                "bridge": {
                    "NetworkID": "b0d5b8c3f1a74a6e9c1f3aa1b4f6c2d7a8e9f0a1b2c3d4e5f6a7b8c9d0e1f2a3",
                    "EndpointID": "c1e6c9d4a2b85b7f0d2a4bb2c5a7d3e8b9f0a1b2c3d4e5f6a7b8c9d0e1f2a3b4",
                    "Gateway": "172.17.0.1",
                    "IPAddress": "172.17.0.4",
                    "IPPrefixLen": 16,
                    "MacAddress": "02:42:ac:11:00:04"
                }
            }
        },
        "ResolvConfPath": "/var/lib/docker/containers/4fa6e0f0c678/resolv.conf",
        "HostnamePath": "/var/lib/docker/containers/4fa6e0f0c678/hostname",
        "HostsPath": "/var/lib/docker/containers/4fa6e0f0c678/hosts",
        "Name": "/web-worker",
        "Driver": "overlay2",
        "ExecDriver": "native-0.2",
        "ProcessLabel": "",
        "MountLabel": "",
        "AppArmorProfile": "docker-default",
        "LogPath": "/var/lib/docker/containers/4fa6e0f0c678/4fa6e0f0c678-json.log",
        "RestartCount": 2,
        "ExecIDs": ["b3a9c1d5e7f9"],
        "Mounts": [{
            "Type": "bind",
            "Source": "/var/data",
            "Destination": "/srv/data",
            "Mode": "rw",
            "RW": true,
            "Propagation": "rprivate"
        }],
        "Node": {
            "Id": "NQ4H:ZG2P:SYKN:6SDW:KGVx:IF7M:ZROG:PAAH:2B4K:Q6DK:VS7E:WBMC",
            "Ip": "10.0.0.12",
            "Addr": "10.0.0.12:2375",
            "Name": "swarm-node-03"
        }
    })
}

#[test]
fn decodes_full_inspect_payload() {
    let info: ContainerInfo = Decoder::pinned()
        .decode_value(inspect_fixture())
        .expect("decode failed");

    assert_eq!(
        info.id,
        "4fa6e0f0c6786287e131c3852c58a2e01cc697a68231826813597e4994f1d6e2"
    );
    assert_eq!(info.created.year(), 2024);
    assert_eq!(info.path, "/bin/sh");
    assert_eq!(info.args.len(), 2);
    assert_eq!(info.config.image, "alpine:3.19");
    assert_eq!(info.config.cmd.as_deref().map(<[String]>::len), Some(2));
    assert!(info.state.running);
    assert_eq!(info.state.pid, 24713);
    assert_eq!(info.restart_count, 2);
    assert_eq!(info.network_settings.ip_address, "172.17.0.4");
    assert_eq!(info.network_settings.ports.len(), 2);
    assert!(info.network_settings.ports["9090/tcp"].is_none());

    // Mount-descriptor shape: deprecated maps stay absent, not defaulted.
    let mounts = info.mounts.as_ref().expect("mounts");
    assert_eq!(mounts.len(), 1);
    assert_eq!(mounts[0].destination, "/srv/data");
    assert!(info.volumes.is_none());
    assert!(info.volumes_rw.is_none());

    let node = info.node.as_ref().expect("node");
    assert_eq!(node.name, "swarm-node-03");

    // The zero timestamp decodes rather than erroring.
    assert_eq!(info.state.finished_at.year(), 1);
}

#[test]
fn decode_reencode_decode_is_idempotent() {
    let decoder = Decoder::pinned();
    let first: ContainerInfo = decoder.decode_value(inspect_fixture()).expect("first decode");
    let reencoded = serde_json::to_vec(&first).expect("encode");
    let second: ContainerInfo = decoder.decode(&reencoded).expect("second decode");
    assert_eq!(first, second);
}

#[test]
fn missing_id_names_the_field() {
    let mut payload = inspect_fixture();
    payload.as_object_mut().unwrap().remove("Id");

    let err = Decoder::pinned()
        .decode_value::<ContainerInfo>(payload)
        .unwrap_err();
    match err {
        DecodeError::MissingRequiredField { field, .. } => assert_eq!(field, "Id"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn standalone_engine_payload_has_no_node() {
    let mut payload = inspect_fixture();
    payload.as_object_mut().unwrap().remove("Node");

    let info: ContainerInfo = Decoder::pinned().decode_value(payload).expect("decode");
    assert!(info.node.is_none());
}

#[test]
fn pre_mounts_payload_uses_the_deprecated_maps() {
    let mut payload = inspect_fixture();
    let obj = payload.as_object_mut().unwrap();
    obj.remove("Mounts");
    obj.insert(
        "Volumes".to_string(),
        serde_json::json!({"/srv/data": "/var/data"}),
    );
    obj.insert("VolumesRW".to_string(), serde_json::json!({"/srv/data": true}));

    let decoder = Decoder::new(ApiVersion::new(1, 19)).expect("decoder");
    assert!(!decoder.expects_mount_descriptors());

    let info: ContainerInfo = decoder.decode_value(payload).expect("decode");
    assert!(info.mounts.is_none());
    assert_eq!(
        info.volumes.as_ref().and_then(|v| v.get("/srv/data")),
        Some(&"/var/data".to_string())
    );
    assert_eq!(
        info.volumes_rw.as_ref().and_then(|v| v.get("/srv/data")),
        Some(&true)
    );
}

#[test]
fn malformed_nested_value_reports_wire_path() {
    let mut payload = inspect_fixture();
    payload["Config"]["Env"] = serde_json::json!(["A=1", "B=2", 7]);

    let err = Decoder::pinned()
        .decode_value::<ContainerInfo>(payload)
        .unwrap_err();
    match err {
        DecodeError::MalformedValue { path, .. } => assert_eq!(path, "Config.Env[2]"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_restart_count_is_malformed() {
    let mut payload = inspect_fixture();
    payload["RestartCount"] = serde_json::json!(-1);

    let err = Decoder::pinned()
        .decode_value::<ContainerInfo>(payload)
        .unwrap_err();
    match err {
        DecodeError::MalformedValue { path, .. } => assert_eq!(path, "RestartCount"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unparseable_timestamp_is_malformed() {
    let mut payload = inspect_fixture();
    payload["Created"] = serde_json::json!("last tuesday");

    let err = Decoder::pinned()
        .decode_value::<ContainerInfo>(payload)
        .unwrap_err();
    match err {
        DecodeError::MalformedValue { path, .. } => assert_eq!(path, "Created"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_wire_fields_are_ignored() {
    let mut payload = inspect_fixture();
    payload.as_object_mut().unwrap().insert(
        "GraphDriver".to_string(),
        serde_json::json!({"Name": "overlay2", "Data": {}}),
    );
    payload["State"]
        .as_object_mut()
        .unwrap()
        .insert("FutureFlag".to_string(), serde_json::json!(true));

    let info: ContainerInfo = Decoder::pinned().decode_value(payload).expect("decode");
    assert_eq!(info.driver, "overlay2");
}

#[test]
fn decodes_summary_list() {
    let payload = serde_json::json!([{
        "Id": "4fa6e0f0c6786287e131c3852c58a2e01cc697a68231826813597e4994f1d6e2",
        "Names": ["/web-worker"],
        "Image": "alpine:3.19",
        "ImageID": "sha256:7b0fda2d5e1c2bfa2241e9e0b4ccbf9ed9e3a1e0f96f2e04c4b3bf3f3a7b0e61",
        "Command": "/bin/sh -c 'while true; do sleep 1; done'",
        "Created": 1709637753,
        "State": "running",
        "Status": "Up 2 hours",
        "Ports": [{"PrivatePort": 8080, "PublicPort": 8080, "Type": "tcp", "IP": "0.0.0.0"}],
        "Labels": {"com.example.team": "infra"}
    }]);

    let summaries: Vec<ContainerSummary> = Decoder::pinned()
        .decode_value(payload)
        .expect("decode");
    assert_eq!(summaries.len(), 1);
    let created = Utc.timestamp_opt(summaries[0].created, 0).single().unwrap();
    assert_eq!(created.year(), 2024);
    assert_eq!(summaries[0].ports[0].public_port, Some(8080));
    assert!(summaries[0].mounts.is_none());
}
