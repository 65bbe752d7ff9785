//! Weather command handler

use tracing::debug;
use crate::models::WeatherInfo;
use crate::utils::errors::Result;
use crate::handlers::context::BotContext;
use crate::handlers::event::Sender;
use crate::handlers::texts;

pub fn format_report(weather: &WeatherInfo) -> String {
    format!(
        "{}\n\nTemperature: {}\nFeels Like: {}\nUV Index: {}\nWind: {}\nPrecipitation: {}\nHumidity: {}\nPressure: {}\nClouds: {}\nVisibility: {}\nCity: {}\nCountry: {}\nUnits: {}",
        weather.weather_description,
        weather.temp,
        weather.feels_like,
        weather.uv_index,
        weather.wind,
        weather.precipitation,
        weather.humidity,
        weather.pressure,
        weather.clouds,
        weather.visibility,
        weather.city,
        weather.country,
        weather.units,
    )
}

/// Handle /weather command
pub async fn handle_weather(ctx: &BotContext, sender: &Sender) -> Result<()> {
    let Some(user) = ctx.users.get_user(sender.user_id).await? else {
        ctx.reply(sender.chat_id, texts::NOT_REGISTERED).await?;
        return Ok(());
    };

    if !user.has_location() {
        ctx.reply(sender.chat_id, texts::NO_LOCATION).await?;
        return Ok(());
    }
    let city = user.city.as_deref().unwrap_or_default();
    let country = user.country.as_deref().unwrap_or_default();

    debug!(user_id = user.id, city = %city, units = %user.units, "Fetching weather");
    match ctx.providers.fetch_weather(city, country, user.units).await {
        Some(weather) => ctx.reply(sender.chat_id, &format_report(&weather)).await?,
        None => ctx.reply(sender.chat_id, texts::WEATHER_FAILED).await?,
    };
    Ok(())
}
