/// The instance attributes shown on the page, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    AmiId,
    InstanceId,
    InstanceType,
    InstanceAction,
    Hostname,
    LocalHostname,
    PublicHostname,
    LocalIpv4,
    PublicIpv4,
    ReservationId,
    Profile,
    SecurityGroups,
    Mac,
}

impl Attribute {
    pub const ALL: [Attribute; 13] = [
        Attribute::AmiId,
        Attribute::InstanceId,
        Attribute::InstanceType,
        Attribute::InstanceAction,
        Attribute::Hostname,
        Attribute::LocalHostname,
        Attribute::PublicHostname,
        Attribute::LocalIpv4,
        Attribute::PublicIpv4,
        Attribute::ReservationId,
        Attribute::Profile,
        Attribute::SecurityGroups,
        Attribute::Mac,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Attribute::AmiId => "AMI Id",
            Attribute::InstanceId => "Instance Id",
            Attribute::InstanceType => "Instance Type",
            Attribute::InstanceAction => "Instance Action",
            Attribute::Hostname => "Host Name",
            Attribute::LocalHostname => "Local Host Name",
            Attribute::PublicHostname => "Public Host Name",
            Attribute::LocalIpv4 => "Local IPv4",
            Attribute::PublicIpv4 => "Public IPv4",
            Attribute::ReservationId => "Reservation Id",
            Attribute::Profile => "Profile",
            Attribute::SecurityGroups => "Security Groups",
            Attribute::Mac => "MAC",
        }
    }

    /// Path below the metadata base URL
    pub fn path(self) -> &'static str {
        match self {
            Attribute::AmiId => "ami-id",
            Attribute::InstanceId => "instance-id",
            Attribute::InstanceType => "instance-type",
            Attribute::InstanceAction => "instance-action",
            Attribute::Hostname => "hostname",
            Attribute::LocalHostname => "local-hostname",
            Attribute::PublicHostname => "public-hostname",
            Attribute::LocalIpv4 => "local-ipv4",
            Attribute::PublicIpv4 => "public-ipv4",
            Attribute::ReservationId => "reservation-id",
            Attribute::Profile => "profile",
            Attribute::SecurityGroups => "security-groups",
            Attribute::Mac => "mac",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_and_paths_are_distinct() {
        let labels: HashSet<_> = Attribute::ALL.iter().map(|a| a.label()).collect();
        let paths: HashSet<_> = Attribute::ALL.iter().map(|a| a.path()).collect();
        assert_eq!(labels.len(), 13);
        assert_eq!(paths.len(), 13);
    }
}
