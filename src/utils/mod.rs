//! # 常用接口模块
//!
//! 目前只有单元测试用的错误断言宏
