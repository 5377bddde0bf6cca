use cutover_ports::PodSummary;

/// Running/total from a header-less `kubectl get pods` listing.
pub fn parse_pod_summary(listing: &str) -> PodSummary {
    let pods: Vec<&str> = listing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    PodSummary {
        running: pods.iter().filter(|line| line.contains("Running")).count(),
        total: pods.len(),
    }
}
