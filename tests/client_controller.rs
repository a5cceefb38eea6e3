mod common;

use common::{desk, pen, spawn_server};
use stockroom::client::{ApiClient, CategoryFilter, Controller, ViewIntent};
use stockroom::inventory::{Category, ItemPatch};

#[tokio::test]
async fn test_add_round_trips_through_refetch() {
    let server = spawn_server().await;
    let mut controller = Controller::new(ApiClient::new(server.base_url.clone()));

    let id = controller.add(pen()).await.expect("add failed");

    let state = controller.state();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, id);
    assert_eq!(state.items[0].name, "Pen");
}

#[tokio::test]
async fn test_update_and_remove_refetch_the_collection() {
    let server = spawn_server().await;
    let mut controller = Controller::new(ApiClient::new(server.base_url.clone()));

    let pen_id = controller.add(pen()).await.unwrap();
    let desk_id = controller.add(desk()).await.unwrap();

    controller
        .update(
            &pen_id,
            ItemPatch {
                quantity: Some(42),
                ..ItemPatch::default()
            },
        )
        .await;
    assert_eq!(controller.state().error, None);
    let pen_item = controller
        .state()
        .items
        .iter()
        .find(|i| i.id == pen_id)
        .unwrap();
    assert_eq!(pen_item.quantity, 42);

    controller.remove(&desk_id).await;
    assert_eq!(controller.state().error, None);
    assert!(controller.state().items.iter().all(|i| i.id != desk_id));
}

#[tokio::test]
async fn test_failed_call_sets_single_error_message() {
    // Nothing listens here; the transport error becomes the view error.
    let mut controller = Controller::new(ApiClient::new("http://127.0.0.1:1"));

    controller.refresh().await;

    let state = controller.state();
    assert!(!state.loading);
    assert!(state.error.is_some());
    assert!(state.items.is_empty());
}

#[tokio::test]
async fn test_remove_unknown_id_surfaces_server_message() {
    let server = spawn_server().await;
    let mut controller = Controller::new(ApiClient::new(server.base_url.clone()));

    controller.remove("missing").await;

    let error = controller.state().error.clone().expect("expected an error");
    assert!(error.contains("not found"), "unexpected message: {error}");
}

#[tokio::test]
async fn test_filter_leaves_total_value_unchanged() {
    let server = spawn_server().await;
    let mut controller = Controller::new(ApiClient::new(server.base_url.clone()));

    controller.add(pen()).await.unwrap();
    controller.apply(ViewIntent::SetFilter(CategoryFilter::Only(
        Category::Furniture,
    )));

    let state = controller.state();
    assert!(state.derived_view().is_empty());
    assert_eq!(state.total_value(), 15.0);
}
