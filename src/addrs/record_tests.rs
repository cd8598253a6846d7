//! Tests for the concrete address records.

use super::*;

mod socket_records {
    use super::*;

    #[test]
    fn tcp_parses_ipv4_and_ipv6() {
        let v4: TcpAddr = "192.0.2.1:80".parse().unwrap();
        let v6: TcpAddr = "[2001:db8::1]:443".parse().unwrap();

        assert_eq!(v4.to_string(), "192.0.2.1:80");
        assert_eq!(v6.to_string(), "[2001:db8::1]:443");
        assert_eq!(v4.socket_addr().port(), 80);
    }

    #[test]
    fn tcp_trims_whitespace() {
        let addr: TcpAddr = "  192.0.2.1:80\n".parse().unwrap();
        assert_eq!(addr.to_string(), "192.0.2.1:80");
    }

    #[test]
    fn tcp_requires_port() {
        let err = "192.0.2.1".parse::<TcpAddr>().unwrap_err();
        assert!(matches!(
            err,
            AddrParseError::Invalid {
                network: Network::Tcp,
                ..
            }
        ));
    }

    #[test]
    fn empty_input_is_reported_as_empty() {
        assert_eq!(
            "   ".parse::<UdpAddr>(),
            Err(AddrParseError::Empty {
                network: Network::Udp
            })
        );
    }

    #[test]
    fn udp_reports_its_own_network() {
        let err = "not-an-addr".parse::<UdpAddr>().unwrap_err();
        assert!(err.to_string().starts_with("Invalid udp address 'not-an-addr'"));
    }

    #[test]
    fn socket_records_expose_ip() {
        let tcp: TcpAddr = "[::1]:22".parse().unwrap();
        let udp: UdpAddr = "10.0.0.1:53".parse().unwrap();

        assert_eq!(AddrRecord::ip(&tcp), Some("::1".parse().unwrap()));
        assert_eq!(AddrRecord::ip(&udp), Some("10.0.0.1".parse().unwrap()));
    }

    #[test]
    fn from_socket_addr() {
        let sa: SocketAddr = "192.0.2.9:9".parse().unwrap();
        assert_eq!(TcpAddr::from(sa).socket_addr(), sa);
        assert_eq!(UdpAddr::from(sa).socket_addr(), sa);
    }
}

mod raw_ip {
    use super::*;

    #[test]
    fn parses_bare_ip() {
        let addr: RawIpAddr = "192.0.2.1".parse().unwrap();
        assert_eq!(addr.to_string(), "192.0.2.1");
        assert_eq!(addr.zone(), None);
    }

    #[test]
    fn parses_ipv6_with_zone() {
        let addr: RawIpAddr = "fe80::1%eth0".parse().unwrap();
        assert_eq!(addr.zone(), Some("eth0"));
        assert_eq!(addr.to_string(), "fe80::1%eth0");
        assert_eq!(AddrRecord::ip(&addr), Some("fe80::1".parse().unwrap()));
    }

    #[test]
    fn rejects_zone_on_ipv4() {
        let err = "192.0.2.1%eth0".parse::<RawIpAddr>().unwrap_err();
        assert!(err.to_string().contains("only valid for IPv6"));
    }

    #[test]
    fn rejects_empty_zone() {
        let err = "fe80::1%".parse::<RawIpAddr>().unwrap_err();
        assert!(err.to_string().contains("empty zone"));
    }

    #[test]
    fn rejects_socket_form() {
        assert!("192.0.2.1:80".parse::<RawIpAddr>().is_err());
    }
}

mod unix {
    use super::*;

    #[test]
    fn parses_plain_path() {
        let addr: UnixAddr = "/run/app.sock".parse().unwrap();
        assert_eq!(addr.path(), Path::new("/run/app.sock"));
        assert_eq!(addr.to_string(), "/run/app.sock");
    }

    #[test]
    fn strips_unix_prefix() {
        let addr: UnixAddr = "unix:/run/app.sock".parse().unwrap();
        assert_eq!(addr.path(), Path::new("/run/app.sock"));
    }

    #[test]
    fn rejects_empty_path() {
        assert_eq!(
            "unix:".parse::<UnixAddr>(),
            Err(AddrParseError::Empty {
                network: Network::Unix
            })
        );
    }

    #[test]
    fn never_has_ip() {
        let addr = UnixAddr::new("/tmp/x.sock");
        assert_eq!(AddrRecord::ip(&addr), None);
    }
}

#[test]
fn records_declare_their_network() {
    assert_eq!(TcpAddr::NETWORK, Network::Tcp);
    assert_eq!(UdpAddr::NETWORK, Network::Udp);
    assert_eq!(RawIpAddr::NETWORK, Network::Ip);
    assert_eq!(UnixAddr::NETWORK, Network::Unix);
}
