pub mod landing;
pub mod timetable;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Test that all route module constants are accessible
        assert_eq!(super::landing::LIST_SALONS, "list_salons");
        assert_eq!(super::timetable::GET_TIMETABLE, "get_timetable");
    }
}
