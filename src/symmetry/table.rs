//! # 空间群符号表
//!
//! 230 个空间群的标准设定，以及常用的替代设定（原点选择 1/2、六方/菱面体轴、
//! 单斜晶胞选择、Pbnm）。
//!
//! 每行: (IT 编号, 坐标系代码, H-M 符号, 短符号, Hall 符号)。
//! 同一 H-M 符号的多个设定中，排在前面的是未指定设定时的缺省设定。
//!
//! ## 数据来源
//! International Tables for Crystallography, Vol. A / Vol. B, Table A1.4.2.7
//!
//! ## 依赖关系
//! - 被 `symmetry/registry.rs` 加载
//! - 纯静态数据，无外部依赖

pub(crate) type SpaceGroupRow = (u16, &'static str, &'static str, &'static str, &'static str);

pub(crate) const SPACE_GROUPS: &[SpaceGroupRow] = &[
    // 三斜
    (1, "", "P 1", "P1", "P 1"),
    (2, "", "P -1", "P-1", "-P 1"),
    // 单斜
    (3, "b", "P 1 2 1", "P2", "P 2y"),
    (4, "b", "P 1 21 1", "P21", "P 2yb"),
    (5, "b1", "C 1 2 1", "C2", "C 2y"),
    (6, "b", "P 1 m 1", "Pm", "P -2y"),
    (7, "b1", "P 1 c 1", "Pc", "P -2yc"),
    (8, "b1", "C 1 m 1", "Cm", "C -2y"),
    (9, "b1", "C 1 c 1", "Cc", "C -2yc"),
    (10, "b", "P 1 2/m 1", "P2/m", "-P 2y"),
    (11, "b", "P 1 21/m 1", "P21/m", "-P 2yb"),
    (12, "b1", "C 1 2/m 1", "C2/m", "-C 2y"),
    (13, "b1", "P 1 2/c 1", "P2/c", "-P 2yc"),
    (14, "b1", "P 1 21/c 1", "P21/c", "-P 2ybc"),
    (14, "b2", "P 1 21/n 1", "P21/n", "-P 2yn"),
    (14, "b3", "P 1 21/a 1", "P21/a", "-P 2yab"),
    (15, "b1", "C 1 2/c 1", "C2/c", "-C 2yc"),
    (15, "b3", "I 1 2/a 1", "I2/a", "-I 2ya"),
    // 正交
    (16, "", "P 2 2 2", "P222", "P 2 2"),
    (17, "", "P 2 2 21", "P2221", "P 2c 2"),
    (18, "", "P 21 21 2", "P21212", "P 2 2ab"),
    (19, "", "P 21 21 21", "P212121", "P 2ac 2ab"),
    (20, "", "C 2 2 21", "C2221", "C 2c 2"),
    (21, "", "C 2 2 2", "C222", "C 2 2"),
    (22, "", "F 2 2 2", "F222", "F 2 2"),
    (23, "", "I 2 2 2", "I222", "I 2 2"),
    (24, "", "I 21 21 21", "I212121", "I 2b 2c"),
    (25, "", "P m m 2", "Pmm2", "P 2 -2"),
    (26, "", "P m c 21", "Pmc21", "P 2c -2"),
    (27, "", "P c c 2", "Pcc2", "P 2 -2c"),
    (28, "", "P m a 2", "Pma2", "P 2 -2a"),
    (29, "", "P c a 21", "Pca21", "P 2c -2ac"),
    (30, "", "P n c 2", "Pnc2", "P 2 -2bc"),
    (31, "", "P m n 21", "Pmn21", "P 2ac -2"),
    (32, "", "P b a 2", "Pba2", "P 2 -2ab"),
    (33, "", "P n a 21", "Pna21", "P 2c -2n"),
    (34, "", "P n n 2", "Pnn2", "P 2 -2n"),
    (35, "", "C m m 2", "Cmm2", "C 2 -2"),
    (36, "", "C m c 21", "Cmc21", "C 2c -2"),
    (37, "", "C c c 2", "Ccc2", "C 2 -2c"),
    (38, "", "A m m 2", "Amm2", "A 2 -2"),
    (39, "", "A b m 2", "Abm2", "A 2 -2b"),
    (40, "", "A m a 2", "Ama2", "A 2 -2a"),
    (41, "", "A b a 2", "Aba2", "A 2 -2ab"),
    (42, "", "F m m 2", "Fmm2", "F 2 -2"),
    (43, "", "F d d 2", "Fdd2", "F 2 -2d"),
    (44, "", "I m m 2", "Imm2", "I 2 -2"),
    (45, "", "I b a 2", "Iba2", "I 2 -2c"),
    (46, "", "I m a 2", "Ima2", "I 2 -2a"),
    (47, "", "P m m m", "Pmmm", "-P 2 2"),
    (48, "2", "P n n n", "Pnnn", "-P 2ab 2bc"),
    (48, "1", "P n n n", "Pnnn", "P 2 2 -1n"),
    (49, "", "P c c m", "Pccm", "-P 2 2c"),
    (50, "2", "P b a n", "Pban", "-P 2ab 2b"),
    (50, "1", "P b a n", "Pban", "P 2 2 -1ab"),
    (51, "", "P m m a", "Pmma", "-P 2a 2a"),
    (52, "", "P n n a", "Pnna", "-P 2a 2bc"),
    (53, "", "P m n a", "Pmna", "-P 2ac 2"),
    (54, "", "P c c a", "Pcca", "-P 2a 2ac"),
    (55, "", "P b a m", "Pbam", "-P 2 2ab"),
    (56, "", "P c c n", "Pccn", "-P 2ab 2ac"),
    (57, "", "P b c m", "Pbcm", "-P 2c 2b"),
    (58, "", "P n n m", "Pnnm", "-P 2 2n"),
    (59, "2", "P m m n", "Pmmn", "-P 2ab 2a"),
    (59, "1", "P m m n", "Pmmn", "P 2 2ab -1ab"),
    (60, "", "P b c n", "Pbcn", "-P 2n 2ab"),
    (61, "", "P b c a", "Pbca", "-P 2ac 2ab"),
    (62, "", "P n m a", "Pnma", "-P 2ac 2n"),
    (62, "cab", "P b n m", "Pbnm", "-P 2c 2ab"),
    (63, "", "C m c m", "Cmcm", "-C 2c 2"),
    (64, "", "C m c a", "Cmca", "-C 2bc 2"),
    (65, "", "C m m m", "Cmmm", "-C 2 2"),
    (66, "", "C c c m", "Cccm", "-C 2 2c"),
    (67, "", "C m m a", "Cmma", "-C 2b 2"),
    (68, "2", "C c c a", "Ccca", "-C 2b 2bc"),
    (68, "1", "C c c a", "Ccca", "C 2 2 -1bc"),
    (69, "", "F m m m", "Fmmm", "-F 2 2"),
    (70, "2", "F d d d", "Fddd", "-F 2uv 2vw"),
    (70, "1", "F d d d", "Fddd", "F 2 2 -1d"),
    (71, "", "I m m m", "Immm", "-I 2 2"),
    (72, "", "I b a m", "Ibam", "-I 2 2c"),
    (73, "", "I b c a", "Ibca", "-I 2b 2c"),
    (74, "", "I m m a", "Imma", "-I 2b 2"),
    // 四方
    (75, "", "P 4", "P4", "P 4"),
    (76, "", "P 41", "P41", "P 4w"),
    (77, "", "P 42", "P42", "P 4c"),
    (78, "", "P 43", "P43", "P 4cw"),
    (79, "", "I 4", "I4", "I 4"),
    (80, "", "I 41", "I41", "I 4bw"),
    (81, "", "P -4", "P-4", "P -4"),
    (82, "", "I -4", "I-4", "I -4"),
    (83, "", "P 4/m", "P4/m", "-P 4"),
    (84, "", "P 42/m", "P42/m", "-P 4c"),
    (85, "2", "P 4/n", "P4/n", "-P 4a"),
    (85, "1", "P 4/n", "P4/n", "P 4ab -1ab"),
    (86, "2", "P 42/n", "P42/n", "-P 4bc"),
    (86, "1", "P 42/n", "P42/n", "P 4n -1n"),
    (87, "", "I 4/m", "I4/m", "-I 4"),
    (88, "2", "I 41/a", "I41/a", "-I 4ad"),
    (88, "1", "I 41/a", "I41/a", "I 4bw -1bw"),
    (89, "", "P 4 2 2", "P422", "P 4 2"),
    (90, "", "P 4 21 2", "P4212", "P 4ab 2ab"),
    (91, "", "P 41 2 2", "P4122", "P 4w 2c"),
    (92, "", "P 41 21 2", "P41212", "P 4abw 2nw"),
    (93, "", "P 42 2 2", "P4222", "P 4c 2"),
    (94, "", "P 42 21 2", "P42212", "P 4n 2n"),
    (95, "", "P 43 2 2", "P4322", "P 4cw 2c"),
    (96, "", "P 43 21 2", "P43212", "P 4nw 2abw"),
    (97, "", "I 4 2 2", "I422", "I 4 2"),
    (98, "", "I 41 2 2", "I4122", "I 4bw 2bw"),
    (99, "", "P 4 m m", "P4mm", "P 4 -2"),
    (100, "", "P 4 b m", "P4bm", "P 4 -2ab"),
    (101, "", "P 42 c m", "P42cm", "P 4c -2c"),
    (102, "", "P 42 n m", "P42nm", "P 4n -2n"),
    (103, "", "P 4 c c", "P4cc", "P 4 -2c"),
    (104, "", "P 4 n c", "P4nc", "P 4 -2n"),
    (105, "", "P 42 m c", "P42mc", "P 4c -2"),
    (106, "", "P 42 b c", "P42bc", "P 4c -2ab"),
    (107, "", "I 4 m m", "I4mm", "I 4 -2"),
    (108, "", "I 4 c m", "I4cm", "I 4 -2c"),
    (109, "", "I 41 m d", "I41md", "I 4bw -2"),
    (110, "", "I 41 c d", "I41cd", "I 4bw -2c"),
    (111, "", "P -4 2 m", "P-42m", "P -4 2"),
    (112, "", "P -4 2 c", "P-42c", "P -4 2c"),
    (113, "", "P -4 21 m", "P-421m", "P -4 2ab"),
    (114, "", "P -4 21 c", "P-421c", "P -4 2n"),
    (115, "", "P -4 m 2", "P-4m2", "P -4 -2"),
    (116, "", "P -4 c 2", "P-4c2", "P -4 -2c"),
    (117, "", "P -4 b 2", "P-4b2", "P -4 -2ab"),
    (118, "", "P -4 n 2", "P-4n2", "P -4 -2n"),
    (119, "", "I -4 m 2", "I-4m2", "I -4 -2"),
    (120, "", "I -4 c 2", "I-4c2", "I -4 -2c"),
    (121, "", "I -4 2 m", "I-42m", "I -4 2"),
    (122, "", "I -4 2 d", "I-42d", "I -4 2bw"),
    (123, "", "P 4/m m m", "P4/mmm", "-P 4 2"),
    (124, "", "P 4/m c c", "P4/mcc", "-P 4 2c"),
    (125, "2", "P 4/n b m", "P4/nbm", "-P 4a 2b"),
    (125, "1", "P 4/n b m", "P4/nbm", "P 4 2 -1ab"),
    (126, "2", "P 4/n n c", "P4/nnc", "-P 4a 2bc"),
    (126, "1", "P 4/n n c", "P4/nnc", "P 4 2 -1n"),
    (127, "", "P 4/m b m", "P4/mbm", "-P 4 2ab"),
    (128, "", "P 4/m n c", "P4/mnc", "-P 4 2n"),
    (129, "2", "P 4/n m m", "P4/nmm", "-P 4a 2a"),
    (129, "1", "P 4/n m m", "P4/nmm", "P 4ab 2ab -1ab"),
    (130, "2", "P 4/n c c", "P4/ncc", "-P 4a 2ac"),
    (130, "1", "P 4/n c c", "P4/ncc", "P 4ab 2n -1ab"),
    (131, "", "P 42/m m c", "P42/mmc", "-P 4c 2"),
    (132, "", "P 42/m c m", "P42/mcm", "-P 4c 2c"),
    (133, "2", "P 42/n b c", "P42/nbc", "-P 4ac 2b"),
    (133, "1", "P 42/n b c", "P42/nbc", "P 4n 2c -1n"),
    (134, "2", "P 42/n n m", "P42/nnm", "-P 4ac 2bc"),
    (134, "1", "P 42/n n m", "P42/nnm", "P 4n 2 -1n"),
    (135, "", "P 42/m b c", "P42/mbc", "-P 4c 2ab"),
    (136, "", "P 42/m n m", "P42/mnm", "-P 4n 2n"),
    (137, "2", "P 42/n m c", "P42/nmc", "-P 4ac 2a"),
    (137, "1", "P 42/n m c", "P42/nmc", "P 4n 2n -1n"),
    (138, "2", "P 42/n c m", "P42/ncm", "-P 4ac 2ac"),
    (138, "1", "P 42/n c m", "P42/ncm", "P 4n 2ab -1n"),
    (139, "", "I 4/m m m", "I4/mmm", "-I 4 2"),
    (140, "", "I 4/m c m", "I4/mcm", "-I 4 2c"),
    (141, "2", "I 41/a m d", "I41/amd", "-I 4bd 2"),
    (141, "1", "I 41/a m d", "I41/amd", "I 4bw 2bw -1bw"),
    (142, "2", "I 41/a c d", "I41/acd", "-I 4bd 2c"),
    (142, "1", "I 41/a c d", "I41/acd", "I 4bw 2aw -1bw"),
    // 三方
    (143, "", "P 3", "P3", "P 3"),
    (144, "", "P 31", "P31", "P 31"),
    (145, "", "P 32", "P32", "P 32"),
    (146, "H", "R 3", "R3", "R 3"),
    (146, "R", "R 3", "R3", "P 3*"),
    (147, "", "P -3", "P-3", "-P 3"),
    (148, "H", "R -3", "R-3", "-R 3"),
    (148, "R", "R -3", "R-3", "-P 3*"),
    (149, "", "P 3 1 2", "P312", "P 3 2"),
    (150, "", "P 3 2 1", "P321", "P 3 2\""),
    (151, "", "P 31 1 2", "P3112", "P 31 2c (0 0 1)"),
    (152, "", "P 31 2 1", "P3121", "P 31 2\""),
    (153, "", "P 32 1 2", "P3212", "P 32 2c (0 0 -1)"),
    (154, "", "P 32 2 1", "P3221", "P 32 2\""),
    (155, "H", "R 3 2", "R32", "R 3 2\""),
    (155, "R", "R 3 2", "R32", "P 3* 2"),
    (156, "", "P 3 m 1", "P3m1", "P 3 -2\""),
    (157, "", "P 3 1 m", "P31m", "P 3 -2"),
    (158, "", "P 3 c 1", "P3c1", "P 3 -2\"c"),
    (159, "", "P 3 1 c", "P31c", "P 3 -2c"),
    (160, "H", "R 3 m", "R3m", "R 3 -2\""),
    (160, "R", "R 3 m", "R3m", "P 3* -2"),
    (161, "H", "R 3 c", "R3c", "R 3 -2\"c"),
    (161, "R", "R 3 c", "R3c", "P 3* -2n"),
    (162, "", "P -3 1 m", "P-31m", "-P 3 2"),
    (163, "", "P -3 1 c", "P-31c", "-P 3 2c"),
    (164, "", "P -3 m 1", "P-3m1", "-P 3 2\""),
    (165, "", "P -3 c 1", "P-3c1", "-P 3 2\"c"),
    (166, "H", "R -3 m", "R-3m", "-R 3 2\""),
    (166, "R", "R -3 m", "R-3m", "-P 3* 2"),
    (167, "H", "R -3 c", "R-3c", "-R 3 2\"c"),
    (167, "R", "R -3 c", "R-3c", "-P 3* 2n"),
    // 六方
    (168, "", "P 6", "P6", "P 6"),
    (169, "", "P 61", "P61", "P 61"),
    (170, "", "P 65", "P65", "P 65"),
    (171, "", "P 62", "P62", "P 62"),
    (172, "", "P 64", "P64", "P 64"),
    (173, "", "P 63", "P63", "P 6c"),
    (174, "", "P -6", "P-6", "P -6"),
    (175, "", "P 6/m", "P6/m", "-P 6"),
    (176, "", "P 63/m", "P63/m", "-P 6c"),
    (177, "", "P 6 2 2", "P622", "P 6 2"),
    (178, "", "P 61 2 2", "P6122", "P 61 2 (0 0 -1)"),
    (179, "", "P 65 2 2", "P6522", "P 65 2 (0 0 1)"),
    (180, "", "P 62 2 2", "P6222", "P 62 2c (0 0 1)"),
    (181, "", "P 64 2 2", "P6422", "P 64 2c (0 0 -1)"),
    (182, "", "P 63 2 2", "P6322", "P 6c 2c"),
    (183, "", "P 6 m m", "P6mm", "P 6 -2"),
    (184, "", "P 6 c c", "P6cc", "P 6 -2c"),
    (185, "", "P 63 c m", "P63cm", "P 6c -2"),
    (186, "", "P 63 m c", "P63mc", "P 6c -2c"),
    (187, "", "P -6 m 2", "P-6m2", "P -6 2"),
    (188, "", "P -6 c 2", "P-6c2", "P -6c 2"),
    (189, "", "P -6 2 m", "P-62m", "P -6 -2"),
    (190, "", "P -6 2 c", "P-62c", "P -6c -2c"),
    (191, "", "P 6/m m m", "P6/mmm", "-P 6 2"),
    (192, "", "P 6/m c c", "P6/mcc", "-P 6 2c"),
    (193, "", "P 63/m c m", "P63/mcm", "-P 6c 2"),
    (194, "", "P 63/m m c", "P63/mmc", "-P 6c 2c"),
    // 立方
    (195, "", "P 2 3", "P23", "P 2 2 3"),
    (196, "", "F 2 3", "F23", "F 2 2 3"),
    (197, "", "I 2 3", "I23", "I 2 2 3"),
    (198, "", "P 21 3", "P213", "P 2ac 2ab 3"),
    (199, "", "I 21 3", "I213", "I 2b 2c 3"),
    (200, "", "P m -3", "Pm-3", "-P 2 2 3"),
    (201, "2", "P n -3", "Pn-3", "-P 2ab 2bc 3"),
    (201, "1", "P n -3", "Pn-3", "P 2 2 3 -1n"),
    (202, "", "F m -3", "Fm-3", "-F 2 2 3"),
    (203, "2", "F d -3", "Fd-3", "-F 2uv 2vw 3"),
    (203, "1", "F d -3", "Fd-3", "F 2 2 3 -1d"),
    (204, "", "I m -3", "Im-3", "-I 2 2 3"),
    (205, "", "P a -3", "Pa-3", "-P 2ac 2ab 3"),
    (206, "", "I a -3", "Ia-3", "-I 2b 2c 3"),
    (207, "", "P 4 3 2", "P432", "P 4 2 3"),
    (208, "", "P 42 3 2", "P4232", "P 4n 2 3"),
    (209, "", "F 4 3 2", "F432", "F 4 2 3"),
    (210, "", "F 41 3 2", "F4132", "F 4d 2 3"),
    (211, "", "I 4 3 2", "I432", "I 4 2 3"),
    (212, "", "P 43 3 2", "P4332", "P 4acd 2ab 3"),
    (213, "", "P 41 3 2", "P4132", "P 4bd 2ab 3"),
    (214, "", "I 41 3 2", "I4132", "I 4bd 2c 3"),
    (215, "", "P -4 3 m", "P-43m", "P -4 2 3"),
    (216, "", "F -4 3 m", "F-43m", "F -4 2 3"),
    (217, "", "I -4 3 m", "I-43m", "I -4 2 3"),
    (218, "", "P -4 3 n", "P-43n", "P -4n 2 3"),
    (219, "", "F -4 3 c", "F-43c", "F -4c 2 3"),
    (220, "", "I -4 3 d", "I-43d", "I -4bd 2c 3"),
    (221, "", "P m -3 m", "Pm-3m", "-P 4 2 3"),
    (222, "2", "P n -3 n", "Pn-3n", "-P 4a 2bc 3"),
    (222, "1", "P n -3 n", "Pn-3n", "P 4 2 3 -1n"),
    (223, "", "P m -3 n", "Pm-3n", "-P 4n 2 3"),
    (224, "2", "P n -3 m", "Pn-3m", "-P 4bc 2bc 3"),
    (224, "1", "P n -3 m", "Pn-3m", "P 4n 2 3 -1n"),
    (225, "", "F m -3 m", "Fm-3m", "-F 4 2 3"),
    (226, "", "F m -3 c", "Fm-3c", "-F 4c 2 3"),
    (227, "2", "F d -3 m", "Fd-3m", "-F 4vw 2vw 3"),
    (227, "1", "F d -3 m", "Fd-3m", "F 4d 2 3 -1d"),
    (228, "2", "F d -3 c", "Fd-3c", "-F 4cvw 2vw 3"),
    (228, "1", "F d -3 c", "Fd-3c", "F 4d 2 3 -1ad"),
    (229, "", "I m -3 m", "Im-3m", "-I 4 2 3"),
    (230, "", "I a -3 d", "Ia-3d", "-I 4bd 2c 3"),
];

/// 完整 H-M 符号表：(短符号, 完整符号)
///
/// 只收录完整符号与格式化符号不同的空间群。
pub(crate) const FULL_SYMBOLS: &[(&str, &str)] = &[
    ("Pmmm", "P 2/m 2/m 2/m"),
    ("Pnnn", "P 2/n 2/n 2/n"),
    ("Pccm", "P 2/c 2/c 2/m"),
    ("Pban", "P 2/b 2/a 2/n"),
    ("Pmma", "P 21/m 2/m 2/a"),
    ("Pnna", "P 2/n 21/n 2/a"),
    ("Pmna", "P 2/m 2/n 21/a"),
    ("Pcca", "P 21/c 2/c 2/a"),
    ("Pbam", "P 21/b 21/a 2/m"),
    ("Pccn", "P 21/c 21/c 2/n"),
    ("Pbcm", "P 2/b 21/c 21/m"),
    ("Pnnm", "P 21/n 21/n 2/m"),
    ("Pmmn", "P 21/m 21/m 2/n"),
    ("Pbcn", "P 21/b 2/c 21/n"),
    ("Pbca", "P 21/b 21/c 21/a"),
    ("Pnma", "P 21/n 21/m 21/a"),
    ("Pbnm", "P 21/b 21/n 21/m"),
    ("Cmcm", "C 2/m 2/c 21/m"),
    ("Cmca", "C 2/m 2/c 21/a"),
    ("Cmmm", "C 2/m 2/m 2/m"),
    ("Cccm", "C 2/c 2/c 2/m"),
    ("Cmma", "C 2/m 2/m 2/a"),
    ("Ccca", "C 2/c 2/c 2/a"),
    ("Fmmm", "F 2/m 2/m 2/m"),
    ("Fddd", "F 2/d 2/d 2/d"),
    ("Immm", "I 2/m 2/m 2/m"),
    ("Ibam", "I 2/b 2/a 2/m"),
    ("Ibca", "I 21/b 21/c 21/a"),
    ("Imma", "I 21/m 21/m 21/a"),
    ("P4/mmm", "P 4/m 2/m 2/m"),
    ("P4/mcc", "P 4/m 2/c 2/c"),
    ("P4/nbm", "P 4/n 2/b 2/m"),
    ("P4/nnc", "P 4/n 2/n 2/c"),
    ("P4/mbm", "P 4/m 21/b 2/m"),
    ("P4/mnc", "P 4/m 21/n 2/c"),
    ("P4/nmm", "P 4/n 21/m 2/m"),
    ("P4/ncc", "P 4/n 21/c 2/c"),
    ("P42/mmc", "P 42/m 2/m 2/c"),
    ("P42/mcm", "P 42/m 2/c 2/m"),
    ("P42/nbc", "P 42/n 2/b 2/c"),
    ("P42/nnm", "P 42/n 2/n 2/m"),
    ("P42/mbc", "P 42/m 21/b 2/c"),
    ("P42/mnm", "P 42/m 21/n 2/m"),
    ("P42/nmc", "P 42/n 21/m 2/c"),
    ("P42/ncm", "P 42/n 21/c 2/m"),
    ("I4/mmm", "I 4/m 2/m 2/m"),
    ("I4/mcm", "I 4/m 2/c 2/m"),
    ("I41/amd", "I 41/a 2/m 2/d"),
    ("I41/acd", "I 41/a 2/c 2/d"),
    ("P-31m", "P -3 1 2/m"),
    ("P-31c", "P -3 1 2/c"),
    ("P-3m1", "P -3 2/m 1"),
    ("P-3c1", "P -3 2/c 1"),
    ("R-3m", "R -3 2/m"),
    ("R-3c", "R -3 2/c"),
    ("P6/mmm", "P 6/m 2/m 2/m"),
    ("P6/mcc", "P 6/m 2/c 2/c"),
    ("P63/mcm", "P 63/m 2/c 2/m"),
    ("P63/mmc", "P 63/m 2/m 2/c"),
    ("Pm-3", "P 2/m -3"),
    ("Pn-3", "P 2/n -3"),
    ("Fm-3", "F 2/m -3"),
    ("Fd-3", "F 2/d -3"),
    ("Im-3", "I 2/m -3"),
    ("Pa-3", "P 21/a -3"),
    ("Ia-3", "I 21/a -3"),
    ("Pm-3m", "P 4/m -3 2/m"),
    ("Pn-3n", "P 4/n -3 2/n"),
    ("Pm-3n", "P 42/m -3 2/n"),
    ("Pn-3m", "P 42/n -3 2/m"),
    ("Fm-3m", "F 4/m -3 2/m"),
    ("Fm-3c", "F 4/m -3 2/c"),
    ("Fd-3m", "F 41/d -3 2/m"),
    ("Fd-3c", "F 41/d -3 2/c"),
    ("Im-3m", "I 4/m -3 2/m"),
    ("Ia-3d", "I 41/a -3 2/d"),
];
