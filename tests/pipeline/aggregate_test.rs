#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use staylens::model::{DateRange, HotelCategory, JoinedRow};
    use staylens::pipeline::aggregate::{category_breakdown, summarize, time_series};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn row(
        booking_id: u32,
        category: HotelCategory,
        date: u32,
        revenue: f64,
        occupancy: f64,
    ) -> JoinedRow {
        JoinedRow {
            booking_id,
            hotel_id: 1,
            date_id: date,
            revenue,
            occupancy,
            hotel_name: Some("Hotel A".to_string()),
            hotel_category: Some(category),
            date: Some(day(date)),
            total_bookings: Some(1),
        }
    }

    #[test]
    fn test_summarize_empty_set_is_all_zeros() {
        let kpis = summarize(&[]);
        assert_eq!(kpis.total_revenue, 0.0);
        assert_eq!(kpis.total_bookings, 0);
        assert_eq!(kpis.avg_revenue_per_booking, 0.0);
        assert_eq!(kpis.avg_occupancy, 0.0);
    }

    #[test]
    fn test_summarize_reference_example() {
        // Two bookings at one Luxury hotel on one day.
        let rows = vec![
            row(1, HotelCategory::Luxury, 1, 200.0, 80.0),
            row(2, HotelCategory::Luxury, 1, 300.0, 60.0),
        ];
        let kpis = summarize(&rows);
        assert_eq!(kpis.total_revenue, 500.0);
        assert_eq!(kpis.total_bookings, 2);
        assert_eq!(kpis.avg_revenue_per_booking, 250.0);
        assert_eq!(kpis.avg_occupancy, 70.0);
    }

    #[test]
    fn test_summarize_counts_distinct_booking_ids() {
        let rows = vec![
            row(1, HotelCategory::Luxury, 1, 100.0, 50.0),
            row(1, HotelCategory::Luxury, 2, 100.0, 50.0),
            row(2, HotelCategory::Luxury, 3, 100.0, 50.0),
        ];
        let kpis = summarize(&rows);
        assert_eq!(kpis.total_bookings, 2);
        // The per-booking average divides by the row count, not the
        // distinct count.
        assert_eq!(kpis.avg_revenue_per_booking, 100.0);
    }

    #[test]
    fn test_breakdown_ordered_by_category_rank() {
        let rows = vec![
            row(1, HotelCategory::Economy, 1, 50.0, 60.0),
            row(2, HotelCategory::Luxury, 1, 300.0, 60.0),
            row(3, HotelCategory::Business, 1, 100.0, 60.0),
            row(4, HotelCategory::Economy, 2, 25.0, 60.0),
        ];
        let breakdown = category_breakdown(&rows);
        let categories: Vec<HotelCategory> = breakdown.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            vec![
                HotelCategory::Luxury,
                HotelCategory::Business,
                HotelCategory::Economy,
            ]
        );
        assert_eq!(breakdown[2].total_revenue, 75.0);
    }

    #[test]
    fn test_breakdown_omits_absent_categories() {
        let rows = vec![row(1, HotelCategory::Economy, 1, 50.0, 60.0)];
        let breakdown = category_breakdown(&rows);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].category, HotelCategory::Economy);
    }

    #[test]
    fn test_breakdown_skips_rows_without_category() {
        let mut gap = row(1, HotelCategory::Luxury, 1, 100.0, 60.0);
        gap.hotel_category = None;
        assert!(category_breakdown(&[gap]).is_empty());
    }

    #[test]
    fn test_time_series_covers_every_day_zero_filled() {
        let rows = vec![
            row(1, HotelCategory::Luxury, 2, 200.0, 80.0),
            row(2, HotelCategory::Luxury, 2, 300.0, 60.0),
            row(3, HotelCategory::Luxury, 4, 150.0, 70.0),
        ];
        let range = DateRange::new(day(1), day(5)).unwrap();
        let trend = time_series(&rows, &range);

        assert_eq!(trend.len() as u64, range.len_days());
        let dates: Vec<NaiveDate> = trend.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![day(1), day(2), day(3), day(4), day(5)]);

        assert_eq!(trend[0].total_revenue, 0.0);
        assert_eq!(trend[0].total_bookings, 0);
        assert_eq!(trend[1].total_revenue, 500.0);
        assert_eq!(trend[1].total_bookings, 2);
        assert_eq!(trend[2].total_bookings, 0);
        assert_eq!(trend[3].total_revenue, 150.0);
        assert_eq!(trend[3].total_bookings, 1);
    }

    #[test]
    fn test_time_series_of_empty_rows_is_a_zero_calendar() {
        let range = DateRange::new(day(1), day(3)).unwrap();
        let trend = time_series(&[], &range);
        assert_eq!(trend.len(), 3);
        assert!(trend
            .iter()
            .all(|p| p.total_revenue == 0.0 && p.total_bookings == 0));
    }

    #[test]
    fn test_time_series_reference_example() {
        let rows = vec![
            row(1, HotelCategory::Luxury, 1, 200.0, 80.0),
            row(2, HotelCategory::Luxury, 1, 300.0, 60.0),
        ];
        let range = DateRange::new(day(1), day(1)).unwrap();
        let trend = time_series(&rows, &range);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].date, day(1));
        assert_eq!(trend[0].total_revenue, 500.0);
        assert_eq!(trend[0].total_bookings, 2);
    }
}
