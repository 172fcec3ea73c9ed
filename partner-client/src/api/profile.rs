//! Restaurant profile API

use crate::{ClientResult, HttpClient};
use reqwest::multipart::{Form, Part};
use shared::models::{PhotoAttachment, ProfileSubmission, RestaurantProfile};

/// `/restaurant/profile` endpoints on the remote base.
#[derive(Debug, Clone)]
pub struct ProfileApi {
    http: HttpClient,
}

impl ProfileApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the profile for one partner, authenticated by bearer token.
    pub async fn fetch(&self, partner_id: &str, token: &str) -> ClientResult<RestaurantProfile> {
        self.http
            .clone()
            .with_token(token)
            .get(&format!("restaurant/profile/{partner_id}"))
            .await
    }

    /// Save the profile as a single multipart submission. All-or-nothing;
    /// a non-2xx response surfaces the body text via the error.
    pub async fn save(&self, partner_id: &str, submission: &ProfileSubmission) -> ClientResult<()> {
        let mut form = Form::new()
            .text("restaurantName", submission.restaurant_name.clone())
            .text("address", submission.address.clone())
            .text("openAt", submission.open_at.clone())
            .text("closeAt", submission.close_at.clone())
            .text("premiumTable", submission.premium_table_field())
            .text("pricePerTable", submission.price_per_table.clone())
            .text("description", submission.description.clone())
            .text("partnerId", partner_id.to_string());

        if let Some(photo) = &submission.restaurant_photo {
            form = form.part("restaurantPhoto", photo_part(photo)?);
        }
        if let Some(photo) = &submission.secondary_photo {
            form = form.part("secondaryPhoto", photo_part(photo)?);
        }

        self.http.post_multipart_unit("restaurant/profile", form).await
    }
}

fn photo_part(photo: &PhotoAttachment) -> ClientResult<Part> {
    let part = Part::bytes(photo.bytes.clone())
        .file_name(photo.file_name.clone())
        .mime_str(&photo.mime_type)?;
    Ok(part)
}
