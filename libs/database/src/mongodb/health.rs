use mongodb::Client;

/// `true` when the deployment answers a lightweight command.
pub async fn check_health(client: &Client) -> bool {
    client.list_database_names().await.is_ok()
}
