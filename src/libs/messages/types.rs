#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION TRACKING MESSAGES ===
    SessionStarted,
    SessionResumed(u32),   // minutes carried over
    SessionEnded(u32),     // final minutes
    DayRollover(String),   // new date
    WatchStarted,
    WatchStopped(u32),     // final minutes
    FinalFlushTimedOut,

    // === STORE MESSAGES ===
    CacheReadFailed(String),
    CacheWriteFailed(String),
    CacheCorrupt(String),
    CacheStale(String), // user id
    RemoteFetchFailed(String),
    RemoteWriteFailed(String),
    RemoteRangeFailed(String),
    LocalAggregateFailed(String),
    RemoteAggregateFailed(String),

    // === AUTH MESSAGES ===
    LoginSucceeded(String), // user id
    LoggedOut,
    NotLoggedIn,
    PromptEmail,
    PromptPassword,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleMonitor,
    ConfigModuleServer,
    ServerNotConfigured,
    PromptSelectModules,
    PromptIdleThreshold,
    PromptTickInterval,
    PromptServerApiUrl,

    // === REPORT MESSAGES ===
    SumHeader(String),    // date
    ReportHeader(String), // range
    NoMinutesRecorded,
}
