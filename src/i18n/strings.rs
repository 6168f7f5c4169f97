/// All localized user-facing strings for a language
///
/// Strings are stored raw. HTML output must go through `render::escape_html`.
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Validation Messages ====================
    /// Shown when the MBTI code is not 4 characters from E, I, S, N, T, F, J, P
    pub mbti_invalid: &'static str,

    /// Shown when the Holland code is not 2 characters from R, I, A, S, E, C
    pub holland_invalid: &'static str,

    pub skills_missing: &'static str,
    pub interests_missing: &'static str,

    // ==================== Service Error Messages ====================
    /// API key rejected by the upstream service
    pub error_auth: &'static str,

    /// Upstream rate limit exceeded
    pub error_rate_limited: &'static str,

    /// Upstream could not be reached
    pub error_connection: &'static str,

    /// Upstream rejected the request as malformed
    pub error_invalid_request: &'static str,

    /// Upstream took too long to answer
    pub error_timeout: &'static str,

    /// Prefix for errors that match no known kind; the raw error text follows it
    pub error_system_prefix: &'static str,

    // ==================== Chat Messages ====================
    /// Reply for a blank chat message
    pub chat_empty: &'static str,

    /// Reply when the chat call fails for any reason
    pub chat_failure: &'static str,

    /// System preamble sent ahead of every chat message
    pub chat_system_prompt: &'static str,

    // ==================== Suggestion Prompts ====================
    pub suggestion_system_prompt: &'static str,

    /// Placeholders: {mbti}, {holland}, {skills}, {interests}
    pub suggestion_user_prompt: &'static str,

    // ==================== Page Labels ====================
    pub page_title: &'static str,
    pub form_heading: &'static str,
    pub label_mbti: &'static str,
    pub label_holland: &'static str,
    pub label_skills: &'static str,
    pub label_interests: &'static str,
    pub submit_button: &'static str,
    pub result_heading: &'static str,
    pub suggestion_heading: &'static str,
    pub error_heading: &'static str,
    pub back_link: &'static str,
}

// ==================== Vietnamese Strings ====================

/// Vietnamese language strings (default)
pub const VIETNAMESE_STRINGS: LanguageStrings = LanguageStrings {
    // Validation
    mbti_invalid: "MBTI phải gồm 4 ký tự hợp lệ (E, I, S, N, T, F, J, P).",
    holland_invalid: "Holland phải gồm 2 ký tự hợp lệ (R, I, A, S, E, C).",
    skills_missing: "Vui lòng nhập kỹ năng của bạn.",
    interests_missing: "Vui lòng nhập sở thích của bạn.",

    // Service errors
    error_auth: "API Key không hợp lệ hoặc đã hết hạn.",
    error_rate_limited: "Đã vượt quá giới hạn yêu cầu. Vui lòng thử lại sau.",
    error_connection: "Không thể kết nối đến OpenAI. Vui lòng kiểm tra lại mạng.",
    error_invalid_request: "Yêu cầu gửi đến OpenAI không hợp lệ. Hãy kiểm tra dữ liệu đầu vào.",
    error_timeout: "Yêu cầu mất quá nhiều thời gian. Hãy thử lại sau hoặc rút gọn dữ liệu.",
    error_system_prefix: "Lỗi hệ thống: ",

    // Chat
    chat_empty: "Không có nội dung để xử lý.",
    chat_failure: "Xin lỗi, đã xảy ra lỗi. Vui lòng thử lại sau 😥",
    chat_system_prompt: "Bạn là một chatbot tư vấn nghề nghiệp dễ thương, hài hước và thân thiện.",

    // Suggestion prompts
    suggestion_system_prompt: "Bạn là chuyên gia hướng nghiệp. Dựa trên tính cách MBTI, mã Holland, \
kỹ năng và sở thích của người dùng, hãy gợi ý những nghề nghiệp phù hợp nhất và giải thích ngắn gọn lý do.",
    suggestion_user_prompt: "MBTI: {mbti}\nMã Holland: {holland}\nKỹ năng: {skills}\nSở thích: {interests}\n\n\
Hãy gợi ý 3 đến 5 nghề nghiệp phù hợp với tôi, kèm lý do cho từng nghề.",

    // Pages
    page_title: "Tư vấn nghề nghiệp",
    form_heading: "Khám phá nghề nghiệp phù hợp với bạn",
    label_mbti: "MBTI (ví dụ: INFP)",
    label_holland: "Mã Holland (ví dụ: RI)",
    label_skills: "Kỹ năng",
    label_interests: "Sở thích",
    submit_button: "Gợi ý nghề nghiệp",
    result_heading: "Hồ sơ của bạn",
    suggestion_heading: "Gợi ý nghề nghiệp",
    error_heading: "Đã xảy ra lỗi",
    back_link: "Quay lại",
};

// ==================== English Strings ====================

/// English language strings
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    // Validation
    mbti_invalid: "MBTI must be 4 valid characters (E, I, S, N, T, F, J, P)",
    holland_invalid: "Holland code must be 2 valid characters (R, I, A, S, E, C)",
    skills_missing: "Please enter your skills",
    interests_missing: "Please enter your interests",

    // Service errors
    error_auth: "The API key is invalid or has expired.",
    error_rate_limited: "The request limit has been exceeded. Please try again later.",
    error_connection: "Could not connect to OpenAI. Please check your network.",
    error_invalid_request: "The request sent to OpenAI was invalid. Please check your input.",
    error_timeout: "The request took too long. Please try again later or shorten your input.",
    error_system_prefix: "System error: ",

    // Chat
    chat_empty: "There is nothing to process.",
    chat_failure: "Sorry, something went wrong. Please try again later 😥",
    chat_system_prompt: "You are a cute, funny and friendly career advice chatbot.",

    // Suggestion prompts
    suggestion_system_prompt: "You are a career guidance expert. Based on the user's MBTI type, Holland code, \
skills and interests, suggest the most suitable careers and briefly explain why.",
    suggestion_user_prompt: "MBTI: {mbti}\nHolland code: {holland}\nSkills: {skills}\nInterests: {interests}\n\n\
Suggest 3 to 5 careers that fit me, with a reason for each.",

    // Pages
    page_title: "Career Advisor",
    form_heading: "Discover the career that fits you",
    label_mbti: "MBTI (e.g. INFP)",
    label_holland: "Holland code (e.g. RI)",
    label_skills: "Skills",
    label_interests: "Interests",
    submit_button: "Suggest careers",
    result_heading: "Your profile",
    suggestion_heading: "Career suggestions",
    error_heading: "Something went wrong",
    back_link: "Back",
};
