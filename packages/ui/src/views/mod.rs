mod club_detail;
pub use club_detail::ClubDetailView;
