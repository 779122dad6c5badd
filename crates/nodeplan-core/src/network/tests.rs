use super::*;

fn farm_network() -> Network {
    let mut network = Network::new();
    network.add_node("Velia", 0).unwrap();
    network.add_node("Bartali Farm", 1).unwrap();
    network.connect("Velia", "Bartali Farm").unwrap();
    network
}

#[test]
fn test_zero_cost_nodes_owned_after_construction() {
    let network = farm_network();
    for node in network.nodes() {
        assert_eq!(node.owned, node.cost == 0, "{}", node.name);
    }
}

#[test]
fn test_duplicate_node_rejected() {
    let mut network = farm_network();
    let err = network.add_node("Velia", 3).unwrap_err();
    assert!(matches!(err, NodeplanError::InvalidNetwork { .. }));
    assert_eq!(network.len(), 2);
}

#[test]
fn test_connection_is_one_directional() {
    let mut network = farm_network();
    network.add_node("Toscani Farm", 2).unwrap();
    network.add_connection("Toscani Farm", "Velia").unwrap();

    let velia = network.id("Velia").unwrap();
    let toscani = network.id("Toscani Farm").unwrap();
    assert!(network.is_connected(toscani, velia));
    assert!(!network.is_connected(velia, toscani));
}

#[test]
fn test_connection_to_unknown_node_rejected() {
    let mut network = farm_network();
    let err = network.add_connection("Velia", "Heidel").unwrap_err();
    assert!(err.to_string().contains("Heidel"));
}

#[test]
fn test_self_loop_rejected() {
    let mut network = farm_network();
    assert!(network.add_connection("Velia", "Velia").is_err());
}

#[test]
fn test_production_node_wired_both_ways() {
    let mut network = farm_network();
    let id = network
        .add_production_node(
            "Bartali Farm",
            "A",
            1,
            Some("Velia"),
            &["Potato".to_string()],
        )
        .unwrap();

    let node = network.node(id);
    assert_eq!(node.name, "Bartali Farm: A");
    assert_eq!(node.worker_source.as_deref(), Some("Velia"));
    assert_eq!(node.produces, vec!["Potato".to_string()]);

    let parent = network.id("Bartali Farm").unwrap();
    assert!(network.is_connected(parent, id));
    assert!(network.is_connected(id, parent));
}

#[test]
fn test_case_insensitive_lookup_prefers_first_inserted() {
    let mut network = Network::new();
    let first = network.add_node("Olvia", 1).unwrap();
    let second = network.add_node("OLVIA", 2).unwrap();

    assert_eq!(network.find("olvia"), Some(first));
    assert_eq!(network.id("OLVIA"), Some(second));
    assert!(matches!(
        network.resolve("Calpheon"),
        Err(NodeplanError::UnknownNode { .. })
    ));
}

#[test]
fn test_neighbors_follow_insertion_order() {
    let mut network = Network::new();
    network.add_node("Hub", 0).unwrap();
    network.add_node("Zeta", 1).unwrap();
    network.add_node("Alpha", 1).unwrap();
    network.connect("Hub", "Alpha").unwrap();
    network.connect("Hub", "Zeta").unwrap();

    let hub = network.id("Hub").unwrap();
    let names: Vec<_> = network
        .neighbors(hub)
        .map(|id| network.node(id).name.as_str())
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
}

#[test]
fn test_search_matches_name_or_product() {
    let mut network = farm_network();
    network
        .add_production_node(
            "Bartali Farm",
            "A",
            1,
            Some("Velia"),
            &["Potato".to_string()],
        )
        .unwrap();

    let names = |phrase: &str| -> Vec<String> {
        network
            .search(phrase)
            .into_iter()
            .map(|id| network.node(id).name.clone())
            .collect()
    };

    assert_eq!(names("POTATO"), vec!["Bartali Farm: A"]);
    assert_eq!(names("bartali"), vec!["Bartali Farm", "Bartali Farm: A"]);
    assert!(names("calpheon").is_empty());
}
