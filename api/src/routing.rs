use std::fmt;

/// Continental routing value used by Account-V1 and Match-V5.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoutingCluster {
    Americas,
    #[default]
    Europe,
    Asia,
    Sea,
}

impl RoutingCluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingCluster::Americas => "americas",
            RoutingCluster::Europe => "europe",
            RoutingCluster::Asia => "asia",
            RoutingCluster::Sea => "sea",
        }
    }
}

impl fmt::Display for RoutingCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a platform code ("na1", "euw1", "kr", ...) to its continental cluster.
///
/// Unknown platforms fall back to Europe, the same cluster identity lookups use.
pub fn account_route(platform: &str) -> RoutingCluster {
    match platform {
        "na1" | "br1" | "la1" | "la2" => RoutingCluster::Americas,
        "euw1" | "eun1" | "tr1" | "ru" => RoutingCluster::Europe,
        "kr" | "jp1" => RoutingCluster::Asia,
        "oc1" => RoutingCluster::Sea,
        _ => RoutingCluster::Europe,
    }
}

/// Platform routing for Summoner-V4, League-V4, Mastery and Spectator.
pub fn platform_route(platform: &str) -> &str {
    platform
}
