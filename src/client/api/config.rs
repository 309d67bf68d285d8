use crate::model::api::ClientConfigDto;

pub async fn get_client_config() -> Result<ClientConfigDto, String> {
    super::get("/api/config").await
}
