#[cfg(test)]
mod tests {
    use crate::api::client::MockDnsApiClient;
    use crate::api::models::*;
    use crate::config::Config;
    use crate::provision::*;

    fn test_config() -> Config {
        Config {
            delegation_set_id: "N1PA6795SAMPLE".to_string(),
            soa_email: "hostmaster.example.net".to_string(),
            name_servers: vec![
                "ns2.example.net".to_string(),
                "ns1.example.net".to_string(),
                "ns3.example.net".to_string(),
            ],
        }
    }

    fn created_zone() -> HostedZone {
        HostedZone {
            id: "/hostedzone/Z0123456789ABC".to_string(),
            name: "example.com.".to_string(),
            name_servers: vec![
                "ns-101.awsdns-12.com".to_string(),
                "ns-202.awsdns-25.net".to_string(),
            ],
        }
    }

    fn pending_change() -> ChangeInfo {
        ChangeInfo {
            id: "/change/C2682N5HXP0BZ4".to_string(),
            status: "PENDING".to_string(),
        }
    }

    #[test]
    fn test_soa_value_format() {
        assert_eq!(
            soa_value("ns-101.awsdns-12.com", "hostmaster.example.net"),
            "ns-101.awsdns-12.com. hostmaster.example.net. 1 7200 900 1209600 86400"
        );
    }

    #[test]
    fn test_caller_reference() {
        assert_eq!(
            caller_reference("example.com", 1700000000),
            "zoneup-example.com-1700000000"
        );
    }

    #[test]
    fn test_create_zone_request() {
        let request = create_zone_request("example.com", &test_config(), 42);

        assert_eq!(request.name, "example.com");
        assert_eq!(request.delegation_set_id, "N1PA6795SAMPLE");
        assert_eq!(request.caller_reference, "zoneup-example.com-42");
        assert_eq!(request.comment, "Created by zoneup for example.com");
        assert!(!request.private_zone);
    }

    #[test]
    fn test_change_batch_contents() {
        let config = test_config();
        let changes = build_change_batch("example.com", &config, "ns-101.awsdns-12.com");

        assert_eq!(changes.len(), 2);

        let ns = &changes[0];
        assert_eq!(ns.action, ChangeAction::Upsert);
        assert_eq!(ns.record_set.name, "example.com");
        assert_eq!(ns.record_set.r#type, RecordType::Ns);
        assert_eq!(ns.record_set.ttl, 60);
        assert_eq!(ns.record_set.values, config.name_servers);

        let soa = &changes[1];
        assert_eq!(soa.action, ChangeAction::Upsert);
        assert_eq!(soa.record_set.name, "example.com");
        assert_eq!(soa.record_set.r#type, RecordType::Soa);
        assert_eq!(soa.record_set.ttl, 900);
        assert_eq!(
            soa.record_set.values,
            vec!["ns-101.awsdns-12.com. hostmaster.example.net. 1 7200 900 1209600 86400"]
        );
    }

    #[test]
    fn test_change_batch_serializes_record_types_uppercase() {
        let changes = build_change_batch("example.com", &test_config(), "ns-1.example.org");
        let json = serde_json::to_value(&changes).unwrap();

        assert_eq!(json[0]["action"], "UPSERT");
        assert_eq!(json[0]["record_set"]["type"], "NS");
        assert_eq!(json[1]["record_set"]["type"], "SOA");
    }

    #[tokio::test]
    async fn test_provision_success() {
        let mut mock_client = MockDnsApiClient::new();
        let config = test_config();

        mock_client
            .expect_create_hosted_zone()
            .withf(|request: &CreateZoneRequest| {
                request.name == "example.com"
                    && request.delegation_set_id == "N1PA6795SAMPLE"
                    && request.caller_reference.starts_with("zoneup-example.com-")
                    && !request.private_zone
            })
            .times(1)
            .returning(|_| Ok(created_zone()));

        let expected_changes = build_change_batch("example.com", &config, "ns-101.awsdns-12.com");
        mock_client
            .expect_change_record_sets()
            .withf(move |zone_id: &str, changes: &[RecordChange]| {
                zone_id == "/hostedzone/Z0123456789ABC" && changes == expected_changes.as_slice()
            })
            .times(1)
            .returning(|_, _| Ok(pending_change()));

        let provisioner = ZoneProvisioner::new(mock_client);
        let zone = provisioner.provision("example.com", &config).await.unwrap();

        assert_eq!(zone.zone_id, "/hostedzone/Z0123456789ABC");
        assert_eq!(zone.name_servers, created_zone().name_servers);
        assert_eq!(zone.change, pending_change());
    }

    #[tokio::test]
    async fn test_create_failure_skips_record_update() {
        let mut mock_client = MockDnsApiClient::new();

        mock_client
            .expect_create_hosted_zone()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("DelegationSetNotAvailable")));
        mock_client.expect_change_record_sets().never();

        let provisioner = ZoneProvisioner::new(mock_client);
        let err = provisioner
            .provision("example.com", &test_config())
            .await
            .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("Failed to create hosted zone for example.com"));
        assert!(message.contains("DelegationSetNotAvailable"));
    }

    #[tokio::test]
    async fn test_missing_assigned_nameservers_skips_record_update() {
        let mut mock_client = MockDnsApiClient::new();

        mock_client.expect_create_hosted_zone().returning(|_| {
            Ok(HostedZone {
                name_servers: vec![],
                ..created_zone()
            })
        });
        mock_client.expect_change_record_sets().never();

        let provisioner = ZoneProvisioner::new(mock_client);
        let err = provisioner
            .provision("example.com", &test_config())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("/hostedzone/Z0123456789ABC"));
    }

    #[tokio::test]
    async fn test_update_failure_reports_zone_id() {
        let mut mock_client = MockDnsApiClient::new();

        mock_client
            .expect_create_hosted_zone()
            .returning(|_| Ok(created_zone()));
        mock_client
            .expect_change_record_sets()
            .withf(|zone_id: &str, _: &[RecordChange]| zone_id == "/hostedzone/Z0123456789ABC")
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("InvalidChangeBatch")));

        let provisioner = ZoneProvisioner::new(mock_client);
        let err = provisioner
            .provision("example.com", &test_config())
            .await
            .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message
            .contains("Failed to update NS/SOA records for hosted zone /hostedzone/Z0123456789ABC"));
        assert!(message.contains("InvalidChangeBatch"));
    }
}
