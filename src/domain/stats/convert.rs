//! Conversion: DatasetResponse → Dataset (TryFrom + validation).

use super::wire::{DataSeriesResponse, DatasetResponse, HistoryResponse};
use super::{DataSeries, Dataset, DatasetMeta, HistorySeries};
use crate::error::ShapeError;
use chrono::Timelike;

fn history_from_wire(series: &str, source: HistoryResponse) -> Result<HistorySeries, ShapeError> {
    let interval = source
        .interval
        .parse()
        .map_err(|source| ShapeError::InvalidInterval {
            series: series.to_string(),
            source,
        })?;

    let history = HistorySeries {
        start: source.start,
        last: source.last,
        interval,
        data: source.data,
    };

    if !history.is_empty() && !history.is_consistent() {
        tracing::debug!(
            series,
            reported = %history.last,
            projected = ?history.projected_last(),
            "history `last` does not match start + interval"
        );
    }

    Ok(history)
}

impl TryFrom<DataSeriesResponse> for DataSeries {
    type Error = ShapeError;

    fn try_from(source: DataSeriesResponse) -> Result<Self, Self::Error> {
        let name = source
            .id
            .clone()
            .or_else(|| source.code.clone())
            .unwrap_or_else(|| "<unnamed>".to_string());

        let history = history_from_wire(&name, source.history)?;
        let forecast = source
            .forecast
            .map(|f| history_from_wire(&name, f))
            .transpose()?;

        Ok(DataSeries {
            id: source.id,
            series_type: source.series_type,
            code: source.code,
            network: source.network,
            data_type: source.data_type,
            units: source.units,
            fuel_tech: source.fuel_tech,
            region: source.region,
            interval: source.interval,
            period: source.period,
            history,
            forecast,
            x_capacity_at_present: source.x_capacity_at_present,
        })
    }
}

impl TryFrom<DatasetResponse> for Dataset {
    type Error = ShapeError;

    fn try_from(source: DatasetResponse) -> Result<Self, Self::Error> {
        let data = source
            .data
            .into_iter()
            .map(DataSeries::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let meta = DatasetMeta {
            dataset_type: source.dataset_type,
            version: source.version,
            network: source.network,
            code: source.code,
            region: source.region,
            created_at: source.created_at.and_then(|dt| dt.with_nanosecond(0)),
            feature_flags: source.feature_flags,
            messages: source.messages,
        };

        Ok(Dataset::new(meta, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::network::NetworkRef;
    use serde_json::json;

    fn power_response() -> serde_json::Value {
        json!({
            "type": "power",
            "version": "v3.10.0",
            "network": "nem",
            "code": "nem",
            "region": "NSW1",
            "created_at": "2021-01-25T10:38:07.123456+10:00",
            "messages": [],
            "data": [
                {
                    "id": "nem.nsw1.fuel_tech.black_coal.power",
                    "type": "power",
                    "code": "black_coal",
                    "network": "nem",
                    "fuel_tech": "black_coal",
                    "region": "NSW1",
                    "data_type": "power",
                    "units": "MW",
                    "history": {
                        "start": "2021-01-18T10:35:00+10:00",
                        "last": "2021-01-18T10:45:00+10:00",
                        "interval": "5m",
                        "data": [7123.5, null, 7150.25]
                    },
                    "x_capacity_at_present": 10210.0
                },
                {
                    "id": "nem.nsw1.price",
                    "network": {"code": "NEM"},
                    "region": "NSW1",
                    "data_type": "price",
                    "units": "AUD/MWh",
                    "history": {
                        "start": "2021-01-18T10:30:00+10:00",
                        "last": "2021-01-18T11:30:00+10:00",
                        "interval": "30m",
                        "data": [45.1, 52.0]
                    },
                    "forecast": {
                        "start": "2021-01-18T11:30:00+10:00",
                        "last": "2021-01-18T11:30:00+10:00",
                        "interval": "30m",
                        "data": [60.0]
                    }
                }
            ]
        })
    }

    #[test]
    fn test_dataset_from_json() {
        let ds = Dataset::from_json(power_response()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.meta().version.as_deref(), Some("v3.10.0"));
        assert_eq!(ds.meta().created_at.unwrap().nanosecond(), 0);

        let coal = ds.get_by_id("nem.nsw1.fuel_tech.black_coal.power").unwrap();
        assert_eq!(coal.history.interval.to_string(), "5m");
        assert_eq!(coal.history.data, vec![Some(7123.5), None, Some(7150.25)]);
        assert!(coal.history.is_consistent());
        assert_eq!(coal.network, Some(NetworkRef::Code("nem".to_string())));

        let price = ds.get_by_id("nem.nsw1.price").unwrap();
        assert_eq!(price.network_code(), Some("NEM"));
        assert!(!price.history.is_consistent());
        assert_eq!(price.forecast.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_required_field_is_decode_error() {
        let mut body = power_response();
        body["data"][0].as_object_mut().unwrap().remove("units");
        let err = Dataset::from_json(body).unwrap_err();
        match err {
            ShapeError::Decode { context, source } => {
                assert_eq!(context, "dataset");
                assert!(source.to_string().contains("units"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type_is_decode_error() {
        let mut body = power_response();
        body["data"][0]["history"]["data"] = json!(["a", "b"]);
        assert!(matches!(
            Dataset::from_json(body),
            Err(ShapeError::Decode { .. })
        ));
    }

    #[test]
    fn test_bad_interval_names_series() {
        let mut body = power_response();
        body["data"][1]["history"]["interval"] = json!("30x");
        match Dataset::from_json(body).unwrap_err() {
            ShapeError::InvalidInterval { series, .. } => assert_eq!(series, "nem.nsw1.price"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_forecast_interval_fails_whole_dataset() {
        let mut body = power_response();
        body["data"][1]["forecast"]["interval"] = json!("");
        assert!(Dataset::from_json(body).is_err());
    }

    #[test]
    fn test_dataset_without_data_fails() {
        let err = Dataset::from_json(json!({"version": "v3"})).unwrap_err();
        assert!(err.to_string().contains("data"));
    }
}
