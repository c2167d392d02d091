#[cfg(test)]
mod tests {
    use staylens::model::HotelCategory;

    #[test]
    fn test_rank_orders_luxury_business_economy() {
        assert_eq!(HotelCategory::Luxury.rank(), 0);
        assert_eq!(HotelCategory::Business.rank(), 1);
        assert_eq!(HotelCategory::Economy.rank(), 2);
    }

    #[test]
    fn test_all_is_in_presentation_order() {
        let all = HotelCategory::all();
        let ranks: Vec<u8> = all.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2]);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(HotelCategory::Luxury.to_string(), "Luxury");
        assert_eq!(HotelCategory::Business.to_string(), "Business");
        assert_eq!(HotelCategory::Economy.to_string(), "Economy");
    }
}
